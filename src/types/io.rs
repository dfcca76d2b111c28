/// Value width class of an IO sub-group
///
/// The variants are declared in wire order: every IO element carries the
/// 1, 2, 4 and 8 byte groups followed by the variable-length group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    One,
    Two,
    Four,
    Eight,
    Variable,
}

impl WidthClass {
    pub const WIRE_ORDER: [WidthClass; 5] = [
        WidthClass::One,
        WidthClass::Two,
        WidthClass::Four,
        WidthClass::Eight,
        WidthClass::Variable,
    ];

    /// Width of the value in bytes, `None` for the variable class
    pub fn value_width(self) -> Option<usize> {
        match self {
            WidthClass::One => Some(1),
            WidthClass::Two => Some(2),
            WidthClass::Four => Some(4),
            WidthClass::Eight => Some(8),
            WidthClass::Variable => None,
        }
    }

    pub fn key_prefix(self) -> &'static str {
        match self {
            WidthClass::One => "n1",
            WidthClass::Two => "n2",
            WidthClass::Four => "n4",
            WidthClass::Eight => "n8",
            WidthClass::Variable => "nx",
        }
    }

    pub fn data_key(self) -> &'static str {
        match self {
            WidthClass::One => "n1-data",
            WidthClass::Two => "n2-data",
            WidthClass::Four => "n4-data",
            WidthClass::Eight => "n8-data",
            WidthClass::Variable => "nx-data",
        }
    }

    pub fn id_key(self) -> &'static str {
        match self {
            WidthClass::One => "n1-id",
            WidthClass::Two => "n2-id",
            WidthClass::Four => "n4-id",
            WidthClass::Eight => "n8-id",
            WidthClass::Variable => "nx-id",
        }
    }

    pub fn value_key(self) -> &'static str {
        match self {
            WidthClass::One => "n1-value",
            WidthClass::Two => "n2-value",
            WidthClass::Four => "n4-value",
            WidthClass::Eight => "n8-value",
            WidthClass::Variable => "nx-value",
        }
    }
}

/// Fixed-width IO entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoEntry<V> {
    pub id: u16,
    pub value: V,
}

/// Variable-length IO entry, value kept as raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableIoEntry {
    pub id: u16,
    pub length: u16,
    pub value: Vec<u8>,
}

impl VariableIoEntry {
    pub fn value_hex(&self) -> String {
        hex::encode(&self.value)
    }
}

/// Per-record IO data, grouped by value width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoElement {
    /// IO id that triggered the record, 0 when none did
    pub event_io_id: u16,
    /// Declared total, not guaranteed to match the groups
    pub total_io: u16,
    pub n1: Vec<IoEntry<u8>>,
    pub n2: Vec<IoEntry<u16>>,
    pub n4: Vec<IoEntry<u32>>,
    pub n8: Vec<IoEntry<u64>>,
    pub nx: Vec<VariableIoEntry>,
}

impl IoElement {
    /// Number of entries actually present across all five groups
    pub fn declared_entries(&self) -> usize {
        self.n1.len() + self.n2.len() + self.n4.len() + self.n8.len() + self.nx.len()
    }

    pub fn has_event(&self) -> bool {
        self.event_io_id != 0
    }

    pub fn find_u8(&self, id: u16) -> Option<u8> {
        find_value(&self.n1, id)
    }

    pub fn find_u16(&self, id: u16) -> Option<u16> {
        find_value(&self.n2, id)
    }

    pub fn find_u32(&self, id: u16) -> Option<u32> {
        find_value(&self.n4, id)
    }

    pub fn find_u64(&self, id: u16) -> Option<u64> {
        find_value(&self.n8, id)
    }

    pub fn find_variable(&self, id: u16) -> Option<&[u8]> {
        self.nx
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.value.as_slice())
    }

    pub fn group_len(&self, class: WidthClass) -> usize {
        match class {
            WidthClass::One => self.n1.len(),
            WidthClass::Two => self.n2.len(),
            WidthClass::Four => self.n4.len(),
            WidthClass::Eight => self.n8.len(),
            WidthClass::Variable => self.nx.len(),
        }
    }
}

fn find_value<V: Copy>(entries: &[IoEntry<V>], id: u16) -> Option<V> {
    entries
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.value)
}

#[cfg(feature = "serde")]
mod serialize {
    use super::{IoElement, IoEntry, VariableIoEntry, WidthClass};
    use serde::ser::{SerializeMap, SerializeSeq};
    use serde::{Serialize, Serializer};

    struct Group<'a, E> {
        class: WidthClass,
        entries: &'a [E],
    }

    struct Entry<'a, E> {
        class: WidthClass,
        entry: &'a E,
    }

    impl<'a, E> Serialize for Group<'a, E>
    where
        Entry<'a, E>: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
            for entry in self.entries {
                seq.serialize_element(&Entry {
                    class: self.class,
                    entry,
                })?;
            }
            seq.end()
        }
    }

    impl<V: Serialize> Serialize for Entry<'_, IoEntry<V>> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(2))?;
            map.serialize_entry(self.class.id_key(), &self.entry.id)?;
            map.serialize_entry(self.class.value_key(), &self.entry.value)?;
            map.end()
        }
    }

    impl Serialize for Entry<'_, VariableIoEntry> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(3))?;
            map.serialize_entry(self.class.id_key(), &self.entry.id)?;
            map.serialize_entry("nx-length", &self.entry.length)?;
            map.serialize_entry(self.class.value_key(), &self.entry.value_hex())?;
            map.end()
        }
    }

    impl Serialize for IoElement {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(7))?;
            map.serialize_entry("event-io-id", &self.event_io_id)?;
            map.serialize_entry("total-io", &self.total_io)?;
            map.serialize_entry(
                WidthClass::One.data_key(),
                &Group {
                    class: WidthClass::One,
                    entries: &self.n1,
                },
            )?;
            map.serialize_entry(
                WidthClass::Two.data_key(),
                &Group {
                    class: WidthClass::Two,
                    entries: &self.n2,
                },
            )?;
            map.serialize_entry(
                WidthClass::Four.data_key(),
                &Group {
                    class: WidthClass::Four,
                    entries: &self.n4,
                },
            )?;
            map.serialize_entry(
                WidthClass::Eight.data_key(),
                &Group {
                    class: WidthClass::Eight,
                    entries: &self.n8,
                },
            )?;
            map.serialize_entry(
                WidthClass::Variable.data_key(),
                &Group {
                    class: WidthClass::Variable,
                    entries: &self.nx,
                },
            )?;
            map.end()
        }
    }
}
