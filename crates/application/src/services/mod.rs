mod address_set;
mod suffix_set;

pub use address_set::AddressSet;
pub use suffix_set::SuffixSet;
