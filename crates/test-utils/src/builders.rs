use indexmap::IndexMap;
use depsort::config::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
use depsort::types::UndeclaredPolicy;

/// Builder for `GraphFile` to simplify test setup.
pub struct GraphFileBuilder {
    raw: RawGraphFile,
}

impl GraphFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawGraphFile {
                config: ConfigSection::default(),
                node: IndexMap::new(),
            },
        }
    }

    /// Declare `name` with the given dependencies, appending if it exists.
    pub fn with_node(mut self, name: &str, after: &[&str]) -> Self {
        self.raw
            .node
            .entry(name.to_string())
            .or_insert_with(NodeConfig::default)
            .after
            .extend(after.iter().map(|s| s.to_string()));
        self
    }

    pub fn undeclared(mut self, policy: UndeclaredPolicy) -> Self {
        self.raw.config.undeclared = policy;
        self
    }

    pub fn build_raw(self) -> RawGraphFile {
        self.raw
    }

    pub fn build(self) -> GraphFile {
        GraphFile::try_from(self.raw).expect("Failed to build valid graph file from builder")
    }

    /// Render as TOML in the on-disk format.
    pub fn to_toml(&self) -> String {
        let policy = match self.raw.config.undeclared {
            UndeclaredPolicy::Include => "include",
            UndeclaredPolicy::Reject => "reject",
        };
        let mut out = format!("[config]\nundeclared = {}\n", toml_string(policy));
        for (name, node) in self.raw.node.iter() {
            let after: Vec<String> = node.after.iter().map(|d| toml_string(d)).collect();
            out.push_str(&format!(
                "\n[node.{}]\nafter = [{}]\n",
                toml_string(name),
                after.join(", ")
            ));
        }
        out
    }
}

fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Default for GraphFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
