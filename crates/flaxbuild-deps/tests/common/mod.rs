//! Shared fixtures: a fake toolchain that produces what git, CMake and
//! MSBuild would leave on disk for glslang.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use flaxbuild_deps::dependencies::glslang::{HEADER_DIRS, OUTPUT_LIBRARIES};
use flaxbuild_deps::{Invocation, Result, ToolRunner};

#[derive(Default)]
pub struct FakeToolchain {
    invocations: RefCell<Vec<Invocation>>,
    /// Whether `CMakeCache.txt` existed at each configure call.
    pub cache_seen_at_configure: RefCell<Vec<bool>>,
    /// Program whose invocations exit with code 1.
    pub fail_program: RefCell<Option<String>>,
    /// Written into every produced header and library.
    pub upstream_version: Cell<u32>,
}

impl FakeToolchain {
    pub fn new() -> Self {
        let fake = Self::default();
        fake.upstream_version.set(1);
        fake
    }

    pub fn failing(program: &str) -> Self {
        let fake = Self::new();
        *fake.fail_program.borrow_mut() = Some(program.to_string());
        fake
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.invocations().into_iter().map(|i| i.program).collect()
    }

    fn install(&self, build_dir: &Path) {
        let version = self.upstream_version.get();
        let install = build_dir.join("install");
        let lib = install.join("lib");
        fs::create_dir_all(&lib).unwrap();
        for name in OUTPUT_LIBRARIES {
            fs::write(lib.join(name), format!("{name} v{version}")).unwrap();
        }
        // Built but never staged.
        fs::write(lib.join("glslang-default-resource-limits.lib"), "extra").unwrap();

        for dir in HEADER_DIRS {
            let header_dir = install.join("include").join("glslang").join(dir);
            fs::create_dir_all(header_dir.join("detail")).unwrap();
            fs::write(header_dir.join(format!("{dir}.h")), format!("// {dir} v{version}")).unwrap();
            fs::write(header_dir.join("detail").join("impl.h"), format!("// v{version}")).unwrap();
        }

        let spirv = install.join("include").join("spirv-tools");
        fs::create_dir_all(&spirv).unwrap();
        fs::write(spirv.join("libspirv.h"), format!("// libspirv v{version}")).unwrap();
        fs::write(spirv.join("libspirv.hpp"), format!("// libspirv++ v{version}")).unwrap();
        fs::write(spirv.join("optimizer.hpp"), format!("// optimizer v{version}")).unwrap();
    }
}

impl ToolRunner for FakeToolchain {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        self.invocations.borrow_mut().push(invocation.clone());
        if self.fail_program.borrow().as_deref() == Some(invocation.program.as_str()) {
            return Ok(1);
        }

        let cwd = &invocation.working_dir;
        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        match (invocation.program.as_str(), args.as_slice()) {
            ("git", ["clone", .., dest]) => {
                let dest = cwd.join(dest);
                fs::create_dir_all(dest.join(".git")).unwrap();
                fs::write(dest.join("CMakeLists.txt"), "project(glslang)").unwrap();
            }
            ("cmake", [".", ..]) => {
                let cache = cwd.join("CMakeCache.txt");
                self.cache_seen_at_configure.borrow_mut().push(cache.exists());
                fs::write(cache, "CMAKE_INSTALL_PREFIX=install").unwrap();
                fs::write(cwd.join("glslang.sln"), "solution").unwrap();
            }
            ("cmake", ["--build", ..]) => self.install(cwd),
            _ => {}
        }
        Ok(0)
    }
}

/// Every file under `root` with its contents, keyed by relative path.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(rel, fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}
