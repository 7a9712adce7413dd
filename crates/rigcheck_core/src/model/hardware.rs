//! Catalog component records: CPUs, GPUs, monitors and upgrade kits

use serde::{Deserialize, Serialize};

/// Display resolution tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1080p")]
    Fhd,
    #[serde(rename = "1440p")]
    Qhd,
    #[serde(rename = "4K", alias = "4k")]
    Uhd,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Fhd, Resolution::Qhd, Resolution::Uhd];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Fhd => "1080p",
            Resolution::Qhd => "1440p",
            Resolution::Uhd => "4K",
        }
    }

    /// Relative GPU workload compared to 1080p
    #[must_use]
    pub fn demand(&self) -> f64 {
        match self {
            Resolution::Fhd => 1.0,
            Resolution::Qhd => 1.35,
            Resolution::Uhd => 2.2,
        }
    }

    /// Modeled fps discount compared to 1080p
    #[must_use]
    pub fn fps_scale(&self) -> f64 {
        match self {
            Resolution::Fhd => 1.0,
            Resolution::Qhd => 0.72,
            Resolution::Uhd => 0.48,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// System memory generation supported by a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryType {
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl MemoryType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MemoryType::Ddr4 => "DDR4",
            MemoryType::Ddr5 => "DDR5",
        }
    }

    /// Resolve the memory generation from a free-form speed string such as
    /// `"3200MHz"`, `"DDR5-6000"` or `"6000 MT/s"`.
    ///
    /// An explicit generation wins; otherwise the first number is read as a
    /// transfer rate and anything at or above 4800 is treated as DDR5.
    #[must_use]
    pub fn from_speed(speed: &str) -> Option<MemoryType> {
        let upper = speed.to_ascii_uppercase();
        if upper.contains("DDR5") {
            return Some(MemoryType::Ddr5);
        }
        if upper.contains("DDR4") {
            return Some(MemoryType::Ddr4);
        }

        let digits: String = upper
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        match digits.parse::<u32>() {
            Ok(mhz) if mhz >= 4800 => Some(MemoryType::Ddr5),
            Ok(mhz) if mhz > 0 => Some(MemoryType::Ddr4),
            _ => None,
        }
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Storage tier of the game drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(rename = "HDD")]
    Hdd,
    #[serde(rename = "SATA SSD")]
    SataSsd,
    #[serde(rename = "NVMe")]
    Nvme,
}

impl StorageType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StorageType::Hdd => "HDD",
            StorageType::SataSsd => "SATA SSD",
            StorageType::Nvme => "NVMe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    /// Gaming score on a 0-100 scale
    pub score: f64,
    pub price: f64,
    pub socket: String,
    pub memory_type: MemoryType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gpu {
    pub id: String,
    pub name: String,
    /// VRAM in GB
    pub vram: u32,
    pub score_1080: f64,
    pub score_1440: f64,
    pub score_4k: f64,
    pub price: f64,
}

impl Gpu {
    /// Relative score for the given resolution tier
    #[must_use]
    pub fn score(&self, resolution: Resolution) -> f64 {
        match resolution {
            Resolution::Fhd => self.score_1080,
            Resolution::Qhd => self.score_1440,
            Resolution::Uhd => self.score_4k,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    pub resolution: Resolution,
    pub refresh: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RamKit {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Total capacity in GB
    pub capacity: u32,
    pub memory_type: MemoryType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKit {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub storage_type: StorageType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_type_from_speed() {
        assert_eq!(MemoryType::from_speed("3200MHz"), Some(MemoryType::Ddr4));
        assert_eq!(MemoryType::from_speed("6000 MT/s"), Some(MemoryType::Ddr5));
        assert_eq!(MemoryType::from_speed("ddr5-5200"), Some(MemoryType::Ddr5));
        assert_eq!(MemoryType::from_speed("DDR4 3600"), Some(MemoryType::Ddr4));
        assert_eq!(MemoryType::from_speed("4800"), Some(MemoryType::Ddr5));
        assert_eq!(MemoryType::from_speed("unknown"), None);
        assert_eq!(MemoryType::from_speed(""), None);
    }

    #[test]
    fn test_gpu_score_by_resolution() {
        let gpu = Gpu {
            id: "test".into(),
            name: "Test GPU".into(),
            vram: 8,
            score_1080: 60.0,
            score_1440: 55.0,
            score_4k: 48.0,
            price: 300.0,
        };
        assert_eq!(gpu.score(Resolution::Fhd), 60.0);
        assert_eq!(gpu.score(Resolution::Qhd), 55.0);
        assert_eq!(gpu.score(Resolution::Uhd), 48.0);
    }
}
