#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use exefind_core::error::IntrospectionError;
use exefind_core::services::introspect::{DependencyLister, MetadataExtractor, SymbolLister};

pub const ELF_HEADER: &[u8] = b"\x7fELF\x02\x01\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00";

/// Canned `nm -D` / `objdump -p` output keyed by file name.
#[derive(Default, Clone)]
pub struct FakeTools {
    nm: HashMap<String, String>,
    objdump: HashMap<String, String>,
}

impl FakeTools {
    pub fn with(mut self, file: &str, symbols: &[&str], libs: &[&str]) -> Self {
        let nm = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{:016x} T {s}\n", 0x1000 + i * 0x10))
            .collect::<String>();
        let objdump = format!(
            "\n{file}:     file format elf64-x86-64\n\nDynamic Section:\n{}  SONAME               {file}\n",
            libs.iter().map(|l| format!("  NEEDED               {l}\n")).collect::<String>()
        );
        self.nm.insert(file.to_string(), nm);
        self.objdump.insert(file.to_string(), objdump);
        self
    }

    pub fn extractor(self) -> MetadataExtractor {
        MetadataExtractor::new(FakeNm(self.nm), FakeObjdump(self.objdump))
    }
}

fn key(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default()
}

struct FakeNm(HashMap<String, String>);

impl SymbolLister for FakeNm {
    fn dynamic_symbols(&self, binary: &Path) -> Result<String, IntrospectionError> {
        Ok(self.0.get(&key(binary)).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "fake-nm"
    }
}

struct FakeObjdump(HashMap<String, String>);

impl DependencyLister for FakeObjdump {
    fn program_headers(&self, binary: &Path) -> Result<String, IntrospectionError> {
        Ok(self.0.get(&key(binary)).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "fake-objdump"
    }
}

/// Lister that always fails to spawn.
pub struct BrokenTool;

impl SymbolLister for BrokenTool {
    fn dynamic_symbols(&self, _binary: &Path) -> Result<String, IntrospectionError> {
        Err(IntrospectionError::Spawn {
            tool: "nm".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        })
    }

    fn name(&self) -> &'static str {
        "broken-nm"
    }
}

impl DependencyLister for BrokenTool {
    fn program_headers(&self, _binary: &Path) -> Result<String, IntrospectionError> {
        Err(IntrospectionError::Spawn {
            tool: "objdump".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        })
    }

    fn name(&self) -> &'static str {
        "broken-objdump"
    }
}

pub fn write_elf(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, ELF_HEADER).expect("write fixture");
    path
}

pub fn write_text(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "plain text, not a binary\n").expect("write fixture");
    path
}

/// The `/bin` scenario: `ls` (ELF) and `README` (text).
pub fn bin_scenario(dir: &Path) -> MetadataExtractor {
    write_elf(dir, "ls");
    write_text(dir, "README");
    FakeTools::default().with("ls", &["read", "write"], &["libc.so.6"]).extractor()
}
