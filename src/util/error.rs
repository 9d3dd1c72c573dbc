use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("capacity of {cap} elements exceeded")]
pub struct CapacityOverflow {
    pub cap: usize,
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, PartialEq, Eq)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}
