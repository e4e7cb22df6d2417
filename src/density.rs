use std::fmt;

/// Android screen-density buckets a notification icon is rendered for.
///
/// The set and the pixel sizes follow the platform convention and are
/// not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every bucket, smallest first. Generation runs in this order.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Edge length of the square icon in pixels
    pub fn size(self) -> u32 {
        match self {
            Density::Mdpi => 24,
            Density::Hdpi => 36,
            Density::Xhdpi => 48,
            Density::Xxhdpi => 72,
            Density::Xxxhdpi => 96,
        }
    }

    pub fn drawable_dir(self) -> String {
        format!("drawable-{}", self.label())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
