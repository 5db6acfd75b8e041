//! Fixed catalog of named 256-entry RGB palettes.
//!
//! The catalog is built once and passed by reference to whoever needs it;
//! lookup by name is a pure function over the constructed table. The first
//! entry is the identity grayscale ramp, the rest are perceptual color maps
//! expanded from evenly spaced anchor stops.

/// A named, fixed 256-color lookup table mapping index bytes to RGB.
pub struct PaletteEntry {
    pub name: &'static str,
    pub colors: [[u8; 3]; 256],
}

/// Ordered, immutable palette catalog.
pub struct PaletteTable {
    entries: Vec<PaletteEntry>,
}

impl PaletteTable {
    pub fn new() -> Self {
        let mut entries = vec![PaletteEntry {
            name: "Gray",
            colors: gray_ramp(),
        }];

        for &(name, stops) in COLOR_MAPS {
            entries.push(PaletteEntry {
                name,
                colors: expand(stops),
            });
        }

        Self { entries }
    }

    /// Ordered list for UI population.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Pure lookup by name; an unknown name is a miss the caller handles.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand an indexed buffer into an RGB buffer (3 bytes per pixel) by
/// direct table lookup. No interpolation, no gamma correction.
pub fn apply(indexed: &[u8], entry: &PaletteEntry) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(indexed.len() * 3);
    for &b in indexed {
        rgb.extend_from_slice(&entry.colors[b as usize]);
    }
    rgb
}

fn gray_ramp() -> [[u8; 3]; 256] {
    let mut colors = [[0u8; 3]; 256];
    for (i, c) in colors.iter_mut().enumerate() {
        *c = [i as u8, i as u8, i as u8];
    }
    colors
}

/// Linearly interpolate evenly spaced anchor stops into a full 256-entry
/// table.
fn expand(stops: &[[u8; 3]]) -> [[u8; 3]; 256] {
    debug_assert!(stops.len() >= 2);
    let segments = (stops.len() - 1) as f32;
    let mut colors = [[0u8; 3]; 256];

    for (i, color) in colors.iter_mut().enumerate() {
        let t = i as f32 / 255.0 * segments;
        let lo = (t as usize).min(stops.len() - 2);
        let frac = t - lo as f32;
        for c in 0..3 {
            let a = f32::from(stops[lo][c]);
            let b = f32::from(stops[lo + 1][c]);
            color[c] = (a + (b - a) * frac).round() as u8;
        }
    }

    colors
}

// Anchor stops sampled at even intervals from the matplotlib/seaborn
// reference tables. 256-entry expansion happens once at catalog
// construction.
const COLOR_MAPS: &[(&str, &[[u8; 3]])] = &[
    ("Magma", MAGMA),
    ("Inferno", INFERNO),
    ("Plasma", PLASMA),
    ("Viridis", VIRIDIS),
    ("Cividis", CIVIDIS),
    ("Rocket", ROCKET),
    ("Mako", MAKO),
    ("Turbo", TURBO),
];

const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const INFERNO: &[[u8; 3]] = &[
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const PLASMA: &[[u8; 3]] = &[
    [13, 8, 135],
    [84, 2, 163],
    [139, 10, 165],
    [185, 50, 137],
    [219, 92, 104],
    [244, 136, 73],
    [254, 188, 43],
    [240, 249, 33],
];

const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [110, 206, 88],
    [181, 222, 43],
    [253, 231, 37],
];

const CIVIDIS: &[[u8; 3]] = &[
    [0, 32, 76],
    [0, 42, 102],
    [32, 58, 110],
    [66, 77, 107],
    [98, 94, 106],
    [128, 112, 103],
    [161, 131, 92],
    [197, 152, 72],
    [234, 173, 41],
    [255, 234, 70],
];

const ROCKET: &[[u8; 3]] = &[
    [3, 5, 26],
    [36, 16, 48],
    [77, 20, 65],
    [120, 24, 74],
    [165, 27, 74],
    [207, 46, 60],
    [234, 95, 60],
    [244, 150, 111],
    [250, 196, 167],
    [250, 235, 221],
];

const MAKO: &[[u8; 3]] = &[
    [11, 4, 5],
    [27, 22, 44],
    [38, 42, 84],
    [41, 66, 121],
    [38, 94, 138],
    [42, 122, 147],
    [53, 150, 153],
    [78, 178, 153],
    [133, 202, 160],
    [222, 245, 229],
];

const TURBO: &[[u8; 3]] = &[
    [48, 18, 59],
    [70, 107, 227],
    [40, 187, 235],
    [34, 245, 169],
    [122, 252, 82],
    [218, 222, 52],
    [253, 158, 40],
    [228, 73, 10],
    [122, 4, 3],
];
