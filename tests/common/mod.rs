// tests/common/mod.rs
// Shared fixtures: in-memory grid and node directories

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tahoe_magic::GridError;
use tahoe_magic::grid::{Capability, DirectoryInfo, GridClient};
use tahoe_magic::node::NodeDir;
use tempfile::TempDir;

#[derive(Debug, Default)]
pub struct FakeDir {
    pub readcap: String,
    pub children: BTreeMap<String, Capability>,
}

/// Which primitive should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailAt {
    #[default]
    Nothing,
    /// Every mkdir after the first `n` succeed
    MkdirAfter(usize),
    /// The n-th (0-based) directory listing
    Listing(usize),
    Link,
}

#[derive(Default)]
pub struct FakeGrid {
    pub dirs: Mutex<HashMap<String, FakeDir>>,
    pub fail: FailAt,
    mkdirs: Mutex<usize>,
    listings: Mutex<usize>,
}

fn status_error() -> GridError {
    GridError::Status {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

impl FakeGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(fail: FailAt) -> Self {
        Self {
            fail,
            ..Self::default()
        }
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.lock().unwrap().len()
    }

    pub fn children_of(&self, writecap: &Capability) -> BTreeMap<String, Capability> {
        self.dirs.lock().unwrap()[writecap.as_str()].children.clone()
    }

    pub fn readcap_of(&self, writecap: &Capability) -> Capability {
        Capability::new(self.dirs.lock().unwrap()[writecap.as_str()].readcap.clone())
    }
}

#[async_trait]
impl GridClient for FakeGrid {
    async fn create_directory(&self) -> Result<Capability, GridError> {
        let mut count = self.mkdirs.lock().unwrap();
        if let FailAt::MkdirAfter(n) = self.fail
            && *count >= n
        {
            return Err(status_error());
        }
        *count += 1;

        let n = *count;
        let writecap = format!("URI:DIR2:w{}:fp{}", n, n);
        let readcap = format!("URI:DIR2-RO:r{}:fp{}", n, n);
        self.dirs.lock().unwrap().insert(
            writecap.clone(),
            FakeDir {
                readcap,
                children: BTreeMap::new(),
            },
        );
        Ok(Capability::new(writecap))
    }

    async fn describe_directory(&self, cap: &Capability) -> Result<DirectoryInfo, GridError> {
        let mut count = self.listings.lock().unwrap();
        let index = *count;
        *count += 1;
        if self.fail == FailAt::Listing(index) {
            return Err(status_error());
        }

        let dirs = self.dirs.lock().unwrap();
        match dirs.get(cap.as_str()) {
            Some(dir) => Ok(DirectoryInfo {
                rw_uri: Some(cap.clone()),
                ro_uri: Capability::new(dir.readcap.clone()),
            }),
            None => Err(GridError::Status {
                status: 410,
                body: "No such directory".to_string(),
            }),
        }
    }

    async fn link(
        &self,
        dircap: &Capability,
        name: &str,
        child: &Capability,
    ) -> Result<(), GridError> {
        if self.fail == FailAt::Link {
            return Err(status_error());
        }
        let mut dirs = self.dirs.lock().unwrap();
        let dir = dirs.get_mut(dircap.as_str()).ok_or_else(status_error)?;
        if dir.children.contains_key(name) {
            return Err(GridError::Status {
                status: 409,
                body: format!("child already exists: {name}"),
            });
        }
        dir.children.insert(name.to_string(), child.clone());
        Ok(())
    }
}

/// Fresh node directory with `node.url` and `private/`
pub fn node_dir(node_url: &str) -> (TempDir, NodeDir) {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("private")).unwrap();
    std::fs::write(tmp.path().join("node.url"), format!("{}\n", node_url)).unwrap();
    let node = NodeDir::new(tmp.path());
    (tmp, node)
}
