//! Row records, row ids and the pre-flattened tree buffer.
//!
//! Records are opaque JSON values. Tree children are pulled out of each record
//! when the buffer is built and addressed by slot index afterwards, so nothing
//! downstream walks nested objects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque application record.
pub type Record = serde_json::Value;

/// URL-encoded row key.
pub type RowId = String;

/// Key field used when neither `rowId` nor `rowConfig.keyField` is set.
pub const DEFAULT_ROW_KEY: &str = "_X_ROW_KEY";

/// Look up a dotted field path (`"a.b.c"`) in a record.
pub fn field_value<'a>(record: &'a Record, path: &str) -> Option<&'a Record> {
    if path.is_empty() {
        return None;
    }
    path.split('.').try_fold(record, |value, key| match value {
        Record::Object(map) => map.get(key),
        Record::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Display string of a record value; null and missing become empty.
pub fn value_label(value: Option<&Record>) -> String {
    match value {
        None | Some(Record::Null) => String::new(),
        Some(Record::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Row id of a record: the key field value, URI-component encoded.
pub fn get_rowid(record: &Record, key_field: &str) -> RowId {
    match field_value(record, key_field) {
        None | Some(Record::Null) => String::new(),
        value => urlencoding::encode(&value_label(value)).into_owned(),
    }
}

/// Dotted 1-based path sequence of a tree row, e.g. `[0, 1]` -> `"1.2"`.
pub fn to_tree_path_seq(path: &[usize]) -> String {
    path.iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Display sequence of a row: a plain number, or a dotted path in tree mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seq {
    Number(i64),
    Path(String),
}

impl Default for Seq {
    fn default() -> Self {
        Self::Number(-1)
    }
}

/// Derived per-row metadata, cached by rowid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowMeta {
    pub rowid: RowId,
    /// Tree depth (0 for top-level rows)
    pub level: usize,
    pub seq: Seq,
    /// Position in the full (flattened) dataset
    pub index: usize,
    /// Position among `items`
    pub sibling_index: usize,
    /// Measured height in pixels, 0 when unknown
    pub height: f64,
    /// Slot indices of the rows at this tree level (siblings, self included)
    pub items: Vec<usize>,
}

/// One flattened row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSlot {
    pub record: Record,
    pub rowid: RowId,
    pub level: usize,
    pub parent: Option<usize>,
    pub sibling_index: usize,
    pub children: Vec<usize>,
}

/// Rows in pre-order with parent/child links by index.
#[derive(Debug, Clone, Default)]
pub struct RowBuffer {
    slots: Vec<RowSlot>,
    roots: Vec<usize>,
}

impl RowBuffer {
    /// Flatten records into a buffer.
    ///
    /// With `children_field` set, nested child arrays are moved out of each
    /// record into slots of their own. Records without a key get a generated
    /// `row_N` id written back under the key field.
    pub fn from_records(records: Vec<Record>, key_field: &str, children_field: Option<&str>) -> Self {
        let mut buffer = Self::default();
        let mut stack: Vec<(Record, Option<usize>, usize, usize)> = records
            .into_iter()
            .enumerate()
            .rev()
            .map(|(i, record)| (record, None, 0, i))
            .collect();

        while let Some((mut record, parent, level, sibling_index)) = stack.pop() {
            let index = buffer.slots.len();
            let children = children_field
                .and_then(|field| record.as_object_mut().and_then(|map| map.remove(field)))
                .and_then(|value| match value {
                    Record::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default();

            let mut rowid = get_rowid(&record, key_field);
            if rowid.is_empty() {
                rowid = format!("row_{}", index + 1);
                if let Some(map) = record.as_object_mut() {
                    map.insert(key_field.to_string(), Record::String(rowid.clone()));
                }
            }

            match parent.and_then(|p| buffer.slots.get_mut(p)) {
                Some(parent_slot) => parent_slot.children.push(index),
                None => buffer.roots.push(index),
            }
            buffer.slots.push(RowSlot {
                record,
                rowid,
                level,
                parent,
                sibling_index,
                children: Vec::new(),
            });

            for (i, child) in children.into_iter().enumerate().rev() {
                stack.push((child, Some(index), level + 1, i));
            }
        }
        buffer
    }

    pub fn get(&self, index: usize) -> Option<&RowSlot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Top-level slot indices in display order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn children(&self, index: usize) -> &[usize] {
        self.slots
            .get(index)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Slot indices at the same tree level as `index`, itself included.
    pub fn siblings(&self, index: usize) -> &[usize] {
        match self.slots.get(index).and_then(|slot| slot.parent) {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowSlot> {
        self.slots.iter()
    }

    /// Tree path (sibling positions from the root) of a slot.
    pub fn path(&self, index: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut cursor = self.slots.get(index);
        while let Some(slot) = cursor {
            path.push(slot.sibling_index);
            cursor = slot.parent.and_then(|p| self.slots.get(p));
        }
        path.reverse();
        path
    }

    /// Rows the user can currently see, in display order: roots plus the
    /// descendants of every expanded row.
    pub fn visible_order(&self, is_expanded: impl Fn(&str) -> bool) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.roots.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            let Some(slot) = self.slots.get(index) else {
                continue;
            };
            order.push(index);
            if !slot.children.is_empty() && is_expanded(&slot.rowid) {
                stack.extend(slot.children.iter().rev());
            }
        }
        order
    }
}

/// rowid -> `RowMeta` cache built from a buffer.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    metas: HashMap<RowId, RowMeta>,
}

impl RowIndex {
    /// Build metadata for every slot. `tree` selects dotted path sequences.
    pub fn build(buffer: &RowBuffer, tree: bool) -> Self {
        let mut metas = HashMap::with_capacity(buffer.len());
        for (index, slot) in buffer.iter().enumerate() {
            let seq = if tree {
                Seq::Path(to_tree_path_seq(&buffer.path(index)))
            } else {
                Seq::Number(i64::try_from(index + 1).unwrap_or(i64::MAX))
            };
            metas.insert(
                slot.rowid.clone(),
                RowMeta {
                    rowid: slot.rowid.clone(),
                    level: slot.level,
                    seq,
                    index,
                    sibling_index: slot.sibling_index,
                    height: 0.0,
                    items: buffer.siblings(index).to_vec(),
                },
            );
        }
        Self { metas }
    }

    pub fn get(&self, rowid: &str) -> Option<&RowMeta> {
        self.metas.get(rowid)
    }

    /// Record a measured row height.
    pub fn set_height(&mut self, rowid: &str, height: f64) {
        if let Some(meta) = self.metas.get_mut(rowid) {
            meta.height = height;
        }
    }

    pub fn len(&self) -> usize {
        self.metas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }
}
