mod raw_ordered_map;
mod slot;
mod slots;

pub(crate) use raw_ordered_map::{Bucket, RawOrderedMap};
