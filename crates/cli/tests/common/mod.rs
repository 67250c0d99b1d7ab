// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for end-to-end harness tests.
//!
//! The target scripts are plain POSIX sh implementations of the exercises,
//! so the tests run the binary with `--interpreter sh` and need no python.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Path to the drillcheck binary under test
pub fn drillcheck_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_drillcheck"))
}

/// Write one target script into the source directory
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Create a temporary suite file.
/// Detects JSON vs TOML content and uses the appropriate extension.
pub fn write_suite(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{') || content.trim().starts_with('[');

    let mut file = if is_json {
        tempfile::Builder::new().suffix(".json").tempfile().unwrap()
    } else {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    };

    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Exercise Scripts
// =============================================================================

pub const HELLO: &str = "echo \"Hello, World!\"\n";

pub const HELLO_N: &str = r#"
read n
i=0
while [ "$i" -lt "$n" ]; do
  echo "Hello, World!"
  i=$((i+1))
done
"#;

pub const STOP_LOOP: &str = r#"
while true; do
  echo "Do you want to stop?"
  read answer || exit 0
  if [ "$answer" = "yes" ]; then
    break
  fi
done
"#;

pub const PRINT_1_10: &str = r#"
i=1
while [ "$i" -le 10 ]; do
  echo "$i"
  i=$((i+1))
done
"#;

pub const PRINT_1_10_GROWING: &str = r#"
line=""
i=1
while [ "$i" -le 10 ]; do
  if [ -z "$line" ]; then
    line="$i"
  else
    line="$line $i"
  fi
  echo "$line"
  i=$((i+1))
done
"#;

pub const PATTERN: &str = r#"
for row in "*" "* *" "* * *" "* * * *" "* * * * *" "* * * *" "* * *" "* *" "*"; do
  echo "$row"
done
"#;

pub const LISTS: &str = r#"
cmd="$1"
if [ -z "$cmd" ]; then
  exit 1
fi
shift
case "$cmd" in
  mean)
    sum=0
    count=0
    for x in "$@"; do
      sum=$((sum+x))
      count=$((count+1))
    done
    if [ "$count" -eq 0 ]; then
      exit 1
    fi
    awk "BEGIN { printf \"%.6f\n\", $sum / $count }"
    ;;
  times)
    out=""
    for x in "$@"; do
      out="$out $((x*3))"
    done
    echo $out
    ;;
  even)
    out=""
    for x in "$@"; do
      if [ $((x % 2)) -eq 0 ]; then
        out="$out $x"
      fi
    done
    echo $out
    ;;
  *)
    exit 1
    ;;
esac
"#;

pub const COUNTS: &str = r#"
read word
echo "h:1 e:1 l:2 o:1 in $word"
"#;

pub const PASSWORD: &str = r#"
p="$1"
if [ "${#p}" -ge 7 ]; then
  echo "valid"
else
  echo "invalid"
fi
"#;

pub const HEX: &str = r#"
mode="$1"
value="$2"
case "$mode" in
  encode)
    out=""
    s="$value"
    while [ -n "$s" ]; do
      c=$(printf %.1s "$s")
      h=$(printf %02x "'$c")
      out="$out 0x$h"
      s=${s#?}
    done
    echo $out
    ;;
  decode)
    res=""
    for tok in $value; do
      h=${tok#0x}
      d=$((0x$h))
      o=$(printf %03o "$d")
      c=$(printf "\\$o")
      res="$res$c"
    done
    echo "$res"
    ;;
  *)
    exit 1
    ;;
esac
"#;

/// Write the complete set of exercise scripts the built-in suite expects
pub fn write_all_exercises(dir: &Path) {
    write_script(dir, "hello.py", HELLO);
    write_script(dir, "hello-n.py", HELLO_N);
    write_script(dir, "do-you-want-to-stop.py", STOP_LOOP);
    write_script(dir, "print-1-10.py", PRINT_1_10);
    write_script(dir, "print-1-10-growing.py", PRINT_1_10_GROWING);
    write_script(dir, "pattern.py", PATTERN);
    write_script(dir, "lists.py", LISTS);
    write_script(dir, "counts.py", COUNTS);
    write_script(dir, "password.py", PASSWORD);
    write_script(dir, "hex.py", HEX);
}
