/// Fixed names and default locations for the Android resource tree

pub mod paths {
    /// Resource root used when neither the CLI nor the config names one.
    /// Relative to the working directory (the app repository root).
    pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";

    /// Launcher icon the silhouette is derived from, relative to the resource root
    pub const SOURCE_ICON: &str = "mipmap-xxxhdpi/launcher_icon.png";

    /// File written inside every `drawable-<density>` directory
    pub const OUTPUT_FILE: &str = "ic_notification.png";

    /// Config file picked up from the working directory when `--config` is not given
    pub const CONFIG_FILE: &str = "notification-icons.yaml";
}

pub mod placeholder {
    /// The ellipse is inset by `size / MARGIN_DIVISOR` pixels on every side
    pub const MARGIN_DIVISOR: u32 = 6;
}
