/*!
 * Queue Serialization
 * Manual Serialize/Deserialize: the extraction order plus an entry list,
 * rebuilt through enqueue on the way back in
 */

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::PriorityQueue;
use crate::core::types::{ExtractOrder, Priority};

impl<T: Serialize> Serialize for PriorityQueue<T> {
    /// Serialized as `{ order, entries }` with entries listed as
    /// `(priority, value)` pairs in extraction order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PriorityQueue", 2)?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field("entries", &self.ordered_entries())?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PriorityQueue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["order", "entries"];

        enum Field {
            Order,
            Entries,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct FieldVisitor;

                impl Visitor<'_> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("`order` or `entries`")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: de::Error,
                    {
                        match value {
                            "order" => Ok(Field::Order),
                            "entries" => Ok(Field::Entries),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct QueueVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for QueueVisitor<T> {
            type Value = PriorityQueue<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct PriorityQueue")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let order = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let entries = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(rebuild(order, entries))
            }

            fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut order: Option<ExtractOrder> = None;
                let mut entries: Option<Vec<(Priority, T)>> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Order => {
                            if order.is_some() {
                                return Err(de::Error::duplicate_field("order"));
                            }
                            order = Some(map.next_value()?);
                        }
                        Field::Entries => {
                            if entries.is_some() {
                                return Err(de::Error::duplicate_field("entries"));
                            }
                            entries = Some(map.next_value()?);
                        }
                    }
                }
                let entries = entries.ok_or_else(|| de::Error::missing_field("entries"))?;
                Ok(rebuild(order.unwrap_or_default(), entries))
            }
        }

        deserializer.deserialize_struct("PriorityQueue", FIELDS, QueueVisitor(PhantomData))
    }
}

/// Rebuild a queue through enqueue so the heap invariant and the priority
/// index are restored, and duplicate priorities collapse to the last value.
fn rebuild<T>(order: ExtractOrder, entries: Vec<(Priority, T)>) -> PriorityQueue<T> {
    let mut queue = PriorityQueue::with_order_and_capacity(order, entries.len());
    for (priority, value) in entries {
        queue.enqueue(value, priority);
    }
    queue
}
