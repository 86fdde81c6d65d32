/// Selects the shading rule applied to a hit. Zero is the background;
/// unrecognized tags shade to black.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MaterialTag(pub u32);

impl MaterialTag {
    pub const BACKGROUND: MaterialTag = MaterialTag(0);
    pub const NORMAL_VISUALIZATION: MaterialTag = MaterialTag(1);
    pub const CHECKERBOARD: MaterialTag = MaterialTag(2);
}

impl From<u32> for MaterialTag {
    #[must_use]
    fn from(value: u32) -> Self {
        MaterialTag(value)
    }
}
