pub mod editor;
pub mod generator;

/// Folder the generator fills unless configured otherwise.
pub const TARGET_FOLDER: &str = "./metadata";
/// Folder the editor scans unless configured otherwise.
pub const SOURCE_FOLDER: &str = "./metadata/metadata";

// Generator defaults
pub const TOKEN_COUNT: usize = 200;
pub const BASE_SERIAL: u64 = 2_400_000;
pub const NAME_PREFIX: &str = "K1";
pub const DESCRIPTION_TEMPLATE: &str =
    "KimberLite Collectibles, NFT Serial Number:";
pub const IMAGE_BASE: &str = "https://bafybeibbrhf2bokirbw5yl7xrkdcckftmlicycpysveb3dkrfkp5uevfpu.ipfs.nftstorage.link";
pub const MAX_IN_FLIGHT: usize = 16;

// Editor defaults
pub const EDITED_NAME_PREFIX: &str = "Name";
pub const EDITED_DESCRIPTION: &str = "Description";
pub const EDITED_IMAGE_PREFIX: &str = "image/";
