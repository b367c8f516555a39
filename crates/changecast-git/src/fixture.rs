//! Throwaway repositories for tests

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

use crate::repository::GitRepo;

const FILE_MODE_BLOB: i32 = 0o100644;
const FILE_MODE_TREE: i32 = 0o040000;
const FILE_MODE_GITLINK: i32 = 0o160000;

pub(crate) struct Fixture {
    temp: TempDir,
    repo: Repository,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        Self { temp, repo }
    }

    pub(crate) fn path(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn open(&self) -> GitRepo {
        GitRepo::open(self.temp.path()).unwrap()
    }

    /// Write a file into the working directory without committing it
    pub(crate) fn write_file(&self, name: &str, contents: &str) {
        std::fs::write(self.temp.path().join(name), contents).unwrap();
    }

    /// Commit on HEAD with a tree holding one file
    pub(crate) fn commit(&self, message: &str, author: &str) -> Oid {
        self.commit_with_gitlink(message, author, None)
    }

    /// Commit on HEAD, optionally recording a submodule pointer at `path`
    pub(crate) fn commit_with_gitlink(
        &self,
        message: &str,
        author: &str,
        gitlink: Option<(&str, Oid)>,
    ) -> Oid {
        let blob = self.repo.blob(message.as_bytes()).unwrap();
        let mut root = self.repo.treebuilder(None).unwrap();
        root.insert("file.txt", blob, FILE_MODE_BLOB).unwrap();

        if let Some((path, target)) = gitlink {
            let mut components: Vec<&str> = path.split('/').collect();
            let mut name = components.pop().unwrap();
            let mut oid = target;
            let mut mode = FILE_MODE_GITLINK;

            while let Some(dir) = components.pop() {
                let mut builder = self.repo.treebuilder(None).unwrap();
                builder.insert(name, oid, mode).unwrap();
                oid = builder.write().unwrap();
                name = dir;
                mode = FILE_MODE_TREE;
            }

            root.insert(name, oid, mode).unwrap();
        }

        let tree_id = root.write().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = Signature::now(author, &format!("{}@example.com", author.to_lowercase())).unwrap();

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    pub(crate) fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub(crate) fn annotated_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        let sig = Signature::now("Releaser", "releaser@example.com").unwrap();
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .unwrap();
    }

    pub(crate) fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).unwrap();
    }
}
