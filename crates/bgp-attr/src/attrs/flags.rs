use bitfield_struct::bitfield;

#[bitfield(u8, debug = true)]
#[derive(PartialEq)]
pub struct AttrFlags {
    #[bits(4)]
    pub resvd: u8,
    pub extended: bool,
    pub partial: bool,
    pub transitive: bool,
    pub optional: bool,
}

/// Flags octet carried by a standard COMMUNITY attribute on the wire.
pub const COMMUNITY_FLAGS: u8 = AttrFlags::new()
    .with_optional(true)
    .with_transitive(true)
    .into_bits();
