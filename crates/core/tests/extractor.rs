mod common;

use common::{BrokenTool, FakeTools};
use exefind_core::services::corpus::enumerate;
use exefind_core::services::introspect::MetadataExtractor;
use tempfile::tempdir;

#[test]
fn extractor_parses_fake_tool_output() {
    let temp = tempdir().expect("tempdir");
    let bin = common::write_elf(temp.path(), "curl");
    let extractor = FakeTools::default()
        .with("curl", &["curl_easy_init", "curl_easy_perform"], &["libcurl.so.4", "libc.so.6"])
        .extractor();

    let extracted = extractor.extract(&bin);
    assert_eq!(extracted.symbols, vec!["curl_easy_init", "curl_easy_perform"]);
    assert_eq!(extracted.dependencies, vec!["libcurl.so.4", "libc.so.6"]);
    assert_eq!(extracted.failures, 0);
}

#[test]
fn failing_queries_become_empty_lists() {
    let temp = tempdir().expect("tempdir");
    let bin = common::write_elf(temp.path(), "broken");
    let extractor = MetadataExtractor::new(BrokenTool, BrokenTool);

    let extracted = extractor.extract(&bin);
    assert!(extracted.symbols.is_empty());
    assert!(extracted.dependencies.is_empty());
    assert_eq!(extracted.failures, 2);
}

#[test]
fn record_resolves_path_and_keeps_duplicates() {
    let temp = tempdir().expect("tempdir");
    let bin = common::write_elf(temp.path(), "dup");
    let extractor = FakeTools::default().with("dup", &["open", "open"], &[]).extractor();

    let enumeration = enumerate(&bin, &extractor).expect("enumerate");
    let record = &enumeration.corpus.records()[0];
    assert_eq!(record.name, "dup");
    assert_eq!(record.path, bin.canonicalize().expect("canonicalize"));
    assert!(record.path.is_absolute());
    assert_eq!(record.symbols, vec!["open", "open"]);
    assert!(record.dependencies.is_empty());
}

#[test]
fn missing_tool_binary_yields_spawn_error() {
    use exefind_core::services::backends::NmSymbolLister;
    use exefind_core::services::introspect::SymbolLister;

    let temp = tempdir().expect("tempdir");
    let bin = common::write_elf(temp.path(), "x");
    let lister = NmSymbolLister::new(temp.path().join("no-such-nm"));
    let err = lister.dynamic_symbols(&bin).unwrap_err();
    assert!(err.to_string().contains("failed to spawn no-such-nm"), "unexpected error: {err}");
}

#[cfg(unix)]
#[test]
fn non_zero_exit_still_yields_printed_output() {
    use exefind_core::services::backends::{NmSymbolLister, ObjdumpDependencyLister};
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().expect("tempdir");
    let bin = common::write_elf(temp.path(), "warned");
    let nm = temp.path().join("nm");
    let objdump = temp.path().join("objdump");
    std::fs::write(&nm, "#!/bin/sh\nprintf '0000 T read\\n0010 T write\\n'\nexit 1\n")
        .expect("write fixture");
    std::fs::write(&objdump, "#!/bin/sh\nprintf '  NEEDED  libc.so.6\\n'\nexit 2\n")
        .expect("write fixture");
    for script in [&nm, &objdump] {
        std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755))
            .expect("set permissions");
    }

    let extractor =
        MetadataExtractor::new(NmSymbolLister::new(&nm), ObjdumpDependencyLister::new(&objdump));
    let extracted = extractor.extract(&bin);
    assert_eq!(extracted.symbols, vec!["read", "write"]);
    assert_eq!(extracted.dependencies, vec!["libc.so.6"]);
    assert_eq!(extracted.failures, 0);
}
