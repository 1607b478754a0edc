use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use bit_graph::artifacts::objects::blob::Blob;
use bit_graph::artifacts::objects::commit::Commit;
use bit_graph::artifacts::objects::object::{Object, Packable};
use bit_graph::artifacts::objects::object_id::ObjectId;
use bit_graph::artifacts::objects::tree::{Tree, TreeEntry};
use bytes::Bytes;
use std::io::Write;

pub const FILE_MODE: &str = "100644";
pub const DIRECTORY_MODE: &str = "40000";

/// Writes a `.git` object store and refs directly, without a git binary
pub struct StoreBuilder<'d> {
    dir: &'d TempDir,
}

impl<'d> StoreBuilder<'d> {
    pub fn new(dir: &'d TempDir) -> Self {
        std::fs::create_dir_all(dir.path().join(".git/objects")).expect("Failed to create store");
        StoreBuilder { dir }
    }

    pub fn write_raw(&self, oid: &ObjectId, raw: &[u8]) {
        let path = self.dir.path().join(".git/objects").join(oid.to_path());
        std::fs::create_dir_all(path.parent().expect("object path has a parent"))
            .expect("Failed to create fan-out directory");

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(raw).expect("Failed to compress object");
        std::fs::write(path, encoder.finish().expect("Failed to compress object"))
            .expect("Failed to write object");
    }

    pub fn put(&self, object: &(impl Object + Packable)) -> ObjectId {
        let oid = object.object_id().expect("Failed to hash object");
        self.write_raw(&oid, &object.serialize().expect("Failed to serialize object"));
        oid
    }

    pub fn blob(&self, content: &str) -> ObjectId {
        self.put(&Blob::new(Bytes::copy_from_slice(content.as_bytes())))
    }

    pub fn tree(&self, entries: &[(&str, &str, &ObjectId)]) -> ObjectId {
        let entries = entries
            .iter()
            .map(|(mode, name, oid)| {
                TreeEntry::new(mode.to_string(), name.as_bytes().to_vec(), (*oid).clone())
            })
            .collect();
        self.put(&Tree::new(entries))
    }

    pub fn commit(&self, tree: &ObjectId, parents: &[&ObjectId], message: &str) -> ObjectId {
        self.put(&Commit::new(
            tree.clone(),
            parents.iter().map(|oid| (*oid).clone()).collect(),
            vec![
                ("author".into(), "Ada <ada@example.com> 1700000000 +0000".into()),
                ("committer".into(), "Ada <ada@example.com> 1700000000 +0000".into()),
            ],
            message.into(),
        ))
    }

    pub fn set_branch(&self, branch: &str, content: &str) {
        self.dir
            .child(".git/refs/heads")
            .child(branch)
            .write_str(content)
            .expect("Failed to write branch head");
    }

    pub fn point_branch(&self, branch: &str, oid: &ObjectId) {
        self.set_branch(branch, &format!("{oid}\n"));
    }

    pub fn write_config(&self, branch: &str) {
        let config = serde_json::json!({
            "repo_path": self.dir.path(),
            "branch": branch,
        });
        self.dir
            .child("config.json")
            .write_str(&config.to_string())
            .expect("Failed to write config");
    }
}

/// `[<type>]\n<prefix>` with an optional `\n<name>`, as written in DOT
pub fn label(object_type: &str, oid: &ObjectId, name: Option<&str>) -> String {
    let mut label = format!(r"[{object_type}]\n{}", oid.label_prefix());
    if let Some(name) = name {
        label.push_str(r"\n");
        label.push_str(name);
    }
    label
}

pub fn edge(parent: &str, child: &str) -> String {
    format!("    \"{parent}\" -> \"{child}\"")
}

pub fn document(edges: &[String]) -> String {
    let mut document = String::from("digraph G {\n");
    for edge in edges {
        document.push_str(edge);
        document.push('\n');
    }
    document.push_str("}\n");
    document
}
