//! Pixel-format vocabulary shared between the decoder, the broker, and the
//! acceleration backends.

/// Hardware-specific decoded-frame representation, as reported by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum HardwareFormat {
    /// VA-API surface (Intel/AMD on Linux).
    Vaapi,
    /// DXVA2 surface (Windows).
    Dxva2,
    /// VDA surface (macOS).
    Vda,
    /// VDPAU surface (NVIDIA on Unix). Surface layout depends on the
    /// software chroma layout, see [`crate::map_chroma`].
    Vdpau,
}

/// Planar chroma layout of the software-decoded frame. Only used to
/// disambiguate hardware formats whose surface layout depends on subsampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum SoftwareFormat {
    Yuv420p,
    /// Full-range ("JPEG") 4:2:0.
    Yuvj420p,
    Yuv422p,
    Yuvj422p,
    Yuv444p,
    Yuvj444p,
    Nv12,
    Rgb24,
}

/// Abstract surface format the decode pipeline should expect downstream of
/// hardware acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChromaTag {
    Yv12,
    Uyvy,
    Vdpau420,
    Vdpau422,
    Vdpau444,
    /// No known mapping for the input pair. A value, not an error: advisory
    /// probes treat it as "unsupported", nothing more.
    NoMapping,
}

impl ChromaTag {
    pub fn is_mapped(self) -> bool {
        !matches!(self, ChromaTag::NoMapping)
    }
}

/// Frame-surface container format handed to backend probes: what the coded
/// stream will ask the backend to allocate surfaces for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameDescriptor {
    pub coded_width: u32,
    pub coded_height: u32,
    pub sw_format: SoftwareFormat,
}
