//! Pixel channel descriptions.
//!
//! A pixel is a run of `channels` consecutive 8-bit samples. Only three
//! shapes exist in pixkit:
//!
//! | Variant | Samples | Meaning |
//! |---------|---------|---------|
//! | [`Channels::Gray`] | 1 | luma or a raw Bayer sensor sample |
//! | [`Channels::Rgb`]  | 3 | red, green, blue |
//! | [`Channels::Rgba`] | 4 | RGB plus straight (non-premultiplied) alpha |

use crate::{Error, Result};

/// Number of samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channels {
    /// Single sample per pixel.
    Gray = 1,
    /// Red, green, blue.
    Rgb = 3,
    /// Red, green, blue, straight alpha.
    Rgba = 4,
}

impl Channels {
    /// Parses a raw channel count.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedChannels`] for anything but 1, 3 or 4.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_core::Channels;
    ///
    /// assert_eq!(Channels::from_count(3).unwrap(), Channels::Rgb);
    /// assert!(Channels::from_count(2).is_err());
    /// ```
    pub fn from_count(count: u8) -> Result<Self> {
        match count {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            n => Err(Error::UnsupportedChannels(n)),
        }
    }

    /// Samples per pixel.
    #[inline]
    pub const fn count(self) -> usize {
        self as usize
    }

    /// Returns `true` when the last sample is alpha.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Fails with [`Error::ChannelMismatch`] unless `self == expected`.
    #[inline]
    pub fn expect(self, expected: Channels) -> Result<()> {
        if self == expected {
            Ok(())
        } else {
            Err(Error::channel_mismatch(expected as u8, self as u8))
        }
    }
}

impl TryFrom<u8> for Channels {
    type Error = Error;

    fn try_from(count: u8) -> Result<Self> {
        Self::from_count(count)
    }
}

impl std::fmt::Display for Channels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Gray => "gray",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        };
        f.write_str(name)
    }
}
