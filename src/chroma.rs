use crate::format::{ChromaTag, HardwareFormat, SoftwareFormat};

/// Maps a hardware surface format (plus the software chroma layout, where the
/// hardware surface depends on subsampling) to the chroma tag the rest of the
/// pipeline should expect.
///
/// The result is used to probe support as decoder output, so a
/// [`ChromaTag::NoMapping`] result for an unsupported input is not fatal to
/// callers. That relaxation holds for probing only: a caller that feeds the
/// tag into actual surface allocation must reject `NoMapping` itself.
pub fn map_chroma(hw: HardwareFormat, sw: SoftwareFormat) -> ChromaTag {
    match hw {
        HardwareFormat::Vaapi | HardwareFormat::Dxva2 => ChromaTag::Yv12,
        HardwareFormat::Vda => ChromaTag::Uyvy,
        HardwareFormat::Vdpau => match sw {
            SoftwareFormat::Yuv444p | SoftwareFormat::Yuvj444p => ChromaTag::Vdpau444,
            SoftwareFormat::Yuv422p | SoftwareFormat::Yuvj422p => ChromaTag::Vdpau422,
            SoftwareFormat::Yuv420p | SoftwareFormat::Yuvj420p => ChromaTag::Vdpau420,
            _ => ChromaTag::NoMapping,
        },
        // New hardware formats fail closed rather than guess.
        #[allow(unreachable_patterns)]
        _ => ChromaTag::NoMapping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SW: [SoftwareFormat; 8] = [
        SoftwareFormat::Yuv420p,
        SoftwareFormat::Yuvj420p,
        SoftwareFormat::Yuv422p,
        SoftwareFormat::Yuvj422p,
        SoftwareFormat::Yuv444p,
        SoftwareFormat::Yuvj444p,
        SoftwareFormat::Nv12,
        SoftwareFormat::Rgb24,
    ];

    #[test]
    fn fixed_formats_ignore_software_layout() {
        for sw in ALL_SW {
            assert_eq!(map_chroma(HardwareFormat::Vaapi, sw), ChromaTag::Yv12);
            assert_eq!(map_chroma(HardwareFormat::Dxva2, sw), ChromaTag::Yv12);
            assert_eq!(map_chroma(HardwareFormat::Vda, sw), ChromaTag::Uyvy);
        }
    }

    #[test]
    fn vdpau_branches_on_subsampling() {
        use SoftwareFormat::*;
        let hw = HardwareFormat::Vdpau;
        assert_eq!(map_chroma(hw, Yuv444p), ChromaTag::Vdpau444);
        assert_eq!(map_chroma(hw, Yuvj444p), ChromaTag::Vdpau444);
        assert_eq!(map_chroma(hw, Yuv422p), ChromaTag::Vdpau422);
        assert_eq!(map_chroma(hw, Yuvj422p), ChromaTag::Vdpau422);
        assert_eq!(map_chroma(hw, Yuv420p), ChromaTag::Vdpau420);
        assert_eq!(map_chroma(hw, Yuvj420p), ChromaTag::Vdpau420);
    }

    #[test]
    fn vdpau_unrelated_layouts_have_no_mapping() {
        assert_eq!(
            map_chroma(HardwareFormat::Vdpau, SoftwareFormat::Rgb24),
            ChromaTag::NoMapping
        );
        assert_eq!(
            map_chroma(HardwareFormat::Vdpau, SoftwareFormat::Nv12),
            ChromaTag::NoMapping
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        for hw in [
            HardwareFormat::Vaapi,
            HardwareFormat::Dxva2,
            HardwareFormat::Vda,
            HardwareFormat::Vdpau,
        ] {
            for sw in ALL_SW {
                assert_eq!(map_chroma(hw, sw), map_chroma(hw, sw));
            }
        }
    }
}
