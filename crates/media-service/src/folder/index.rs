//! Name and id lookups over a flat folder list.

use std::collections::HashMap;

use tracing::warn;

use media_entity::folder::FolderRecord;

/// Lookup tables over one folder snapshot.
///
/// Besides the name/id maps, the index decides where each folder is placed:
/// its *effective parent*. That is the folder named by `parentId`, except
///
/// - a `parentId` matching no folder places the folder at root level,
/// - a parent record named `"root"` is the synthetic root itself,
/// - in a parent cycle, the member listed first in the input is placed at
///   root level and the rest of the cycle hangs below it.
///
/// Both tree building and path resolution read effective parents, so an
/// image's resolved path always matches where its folder sits in the tree.
/// Duplicate names are not rejected; the last record with a name wins.
#[derive(Debug, Clone, Default)]
pub struct FolderIndex<'a> {
    /// Records in input order, one per distinct name, excluding `"root"`.
    ordered: Vec<&'a FolderRecord>,
    /// Name to record.
    by_name: HashMap<&'a str, &'a FolderRecord>,
    /// Id to record.
    by_id: HashMap<i64, &'a FolderRecord>,
    /// Name to effective parent name (`None` = root level).
    parents: HashMap<&'a str, Option<&'a str>>,
    /// Folders whose `parentId` matched nothing.
    dangling: Vec<&'a str>,
    /// Folders promoted to root level to break a cycle.
    cycle_breaks: Vec<&'a str>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Walk {
    InProgress,
    Done,
}

impl<'a> FolderIndex<'a> {
    /// Index a folder list in a single pass plus one parent-chain walk.
    pub fn new(folders: &'a [FolderRecord]) -> Self {
        let mut by_name: HashMap<&'a str, &'a FolderRecord> =
            HashMap::with_capacity(folders.len());
        let mut by_id: HashMap<i64, &'a FolderRecord> = HashMap::with_capacity(folders.len());
        for folder in folders {
            by_name.insert(folder.name.as_str(), folder);
            by_id.insert(folder.id, folder);
        }

        // Shadowed duplicates drop out here.
        let ordered: Vec<&'a FolderRecord> = folders
            .iter()
            .filter(|f| !f.is_root_alias())
            .filter(|f| {
                by_name
                    .get(f.name.as_str())
                    .is_some_and(|winner| std::ptr::eq(*winner, *f))
            })
            .collect();

        let mut index = Self {
            ordered,
            by_name,
            by_id,
            parents: HashMap::with_capacity(folders.len()),
            dangling: Vec::new(),
            cycle_breaks: Vec::new(),
        };
        index.link_parents();
        index
    }

    fn link_parents(&mut self) {
        for folder in self.ordered.iter().copied() {
            let parent = match folder.parent_id {
                None => None,
                Some(pid) => match self.by_id.get(&pid).copied() {
                    Some(p) if p.is_root_alias() => None,
                    Some(p) => Some(p.name.as_str()),
                    None => {
                        warn!(
                            folder = %folder.name,
                            parent_id = pid,
                            "Folder parent not found, placing at root level"
                        );
                        self.dangling.push(folder.name.as_str());
                        None
                    }
                },
            };
            self.parents.insert(folder.name.as_str(), parent);
        }

        let position: HashMap<&'a str, usize> = self
            .ordered
            .iter()
            .copied()
            .enumerate()
            .map(|(i, f)| (f.name.as_str(), i))
            .collect();

        let mut state: HashMap<&'a str, Walk> = HashMap::with_capacity(self.ordered.len());
        for folder in self.ordered.iter().copied() {
            let mut chain: Vec<&'a str> = Vec::new();
            let mut current: Option<&'a str> = Some(folder.name.as_str());

            while let Some(name) = current {
                match state.get(name).copied() {
                    Some(Walk::Done) => break,
                    Some(Walk::InProgress) => {
                        let start = chain.iter().position(|n| *n == name).unwrap_or(0);
                        let breaker = chain[start..]
                            .iter()
                            .copied()
                            .min_by_key(|n| position.get(n).copied().unwrap_or(usize::MAX))
                            .unwrap_or(name);
                        warn!(
                            folder = breaker,
                            cycle_len = chain.len() - start,
                            "Folder parent cycle detected, placing at root level"
                        );
                        self.parents.insert(breaker, None);
                        self.cycle_breaks.push(breaker);
                        break;
                    }
                    None => {}
                }
                state.insert(name, Walk::InProgress);
                chain.push(name);
                current = self.parents.get(name).copied().flatten();
            }

            for name in chain {
                state.insert(name, Walk::Done);
            }
        }
    }

    /// Look up a folder by name.
    pub fn get(&self, name: &str) -> Option<&'a FolderRecord> {
        self.by_name.get(name).copied()
    }

    /// Whether a folder with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Backend id for a folder name.
    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.get(name).map(|f| f.id)
    }

    /// Folder name for a backend id.
    pub fn name_of(&self, id: i64) -> Option<&'a str> {
        self.by_id.get(&id).map(|f| f.name.as_str())
    }

    /// Owned `name -> id` map, used to address delete requests.
    pub fn name_to_id(&self) -> HashMap<String, i64> {
        self.by_name
            .iter()
            .map(|(name, f)| ((*name).to_string(), f.id))
            .collect()
    }

    /// The parent a folder is placed under; `None` means root level or an
    /// unknown folder.
    pub fn effective_parent(&self, name: &str) -> Option<&'a str> {
        self.parents.get(name).copied().flatten()
    }

    /// Placeable folders in input order (no duplicates, no `"root"` alias).
    pub fn folders(&self) -> impl Iterator<Item = &'a FolderRecord> + '_ {
        self.ordered.iter().copied()
    }

    /// Folders whose `parentId` referenced a missing folder.
    pub fn dangling_parents(&self) -> &[&'a str] {
        &self.dangling
    }

    /// Folders promoted to root level to break a parent cycle.
    pub fn broken_cycles(&self) -> &[&'a str] {
        &self.cycle_breaks
    }

    /// Number of distinct folder names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when no folders were indexed.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
