//! Nominal icon sizes by filename.
//!
//! Desktop packaging expects specific pixel dimensions for specific icon
//! filenames. The replacement itself never resizes anything, so this mapping
//! only feeds the per-file status lines.

/// Returns the nominal pixel size conventionally expected for an icon
/// filename, defaulting to 128x128 for unrecognized names.
pub fn nominal_size(file_name: &str) -> (u32, u32) {
    match file_name {
        "32x32.png" => (32, 32),
        "128x128.png" => (128, 128),
        // @2x marks a doubled-density variant
        "128x128@2x.png" => (256, 256),
        // standard size for the main application icon
        "icon.png" => (512, 512),
        "Square30x30Logo.png" => (30, 30),
        "Square44x44Logo.png" => (44, 44),
        "Square71x71Logo.png" => (71, 71),
        "Square89x89Logo.png" => (89, 89),
        "Square107x107Logo.png" => (107, 107),
        "Square142x142Logo.png" => (142, 142),
        "Square150x150Logo.png" => (150, 150),
        "Square284x284Logo.png" => (284, 284),
        "Square310x310Logo.png" => (310, 310),
        "StoreLogo.png" => (50, 50),
        _ => (128, 128),
    }
}

#[cfg(test)]
mod tests {
    use super::nominal_size;

    #[test]
    fn recognized_names_map_to_their_sizes() {
        assert_eq!(nominal_size("32x32.png"), (32, 32));
        assert_eq!(nominal_size("128x128@2x.png"), (256, 256));
        assert_eq!(nominal_size("icon.png"), (512, 512));
        assert_eq!(nominal_size("Square310x310Logo.png"), (310, 310));
        assert_eq!(nominal_size("StoreLogo.png"), (50, 50));
    }

    #[test]
    fn unrecognized_names_default_to_128() {
        assert_eq!(nominal_size("custom.png"), (128, 128));
        assert_eq!(nominal_size(""), (128, 128));
    }
}
