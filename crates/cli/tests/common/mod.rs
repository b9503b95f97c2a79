#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const ELF_HEADER: &[u8] = b"\x7fELF\x02\x01\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00";

/// Lay out the `/bin` scenario under `dir`: `ls` (ELF) and `README` (text).
pub fn bin_tree(dir: &Path) -> PathBuf {
    let root = dir.join("bin");
    std::fs::create_dir_all(&root).expect("create dir");
    std::fs::write(root.join("ls"), ELF_HEADER).expect("write fixture");
    std::fs::write(root.join("README"), "not a binary\n").expect("write fixture");
    root
}

/// Write fake `nm` / `objdump` shell scripts that answer for a binary named `ls`.
///
/// Returns `(nm, objdump)` paths, suitable for `EXEFIND_NM` / `EXEFIND_OBJDUMP`.
#[cfg(unix)]
pub fn fake_tools(dir: &Path) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let tools = dir.join("tools");
    std::fs::create_dir_all(&tools).expect("create dir");
    let nm = tools.join("nm");
    let objdump = tools.join("objdump");
    std::fs::write(
        &nm,
        "#!/bin/sh\ncase \"$(basename \"$2\")\" in\n  ls) printf '                 w __gmon_start__\\n0000000000001000 T read\\n0000000000001010 T write\\n' ;;\nesac\n",
    )
    .expect("write fake tool");
    std::fs::write(
        &objdump,
        "#!/bin/sh\ncase \"$(basename \"$2\")\" in\n  ls) printf '\\nDynamic Section:\\n  NEEDED               libc.so.6\\n  SONAME               ls\\n' ;;\nesac\n",
    )
    .expect("write fake tool");
    for script in [&nm, &objdump] {
        std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755))
            .expect("set permissions");
    }
    (nm, objdump)
}
