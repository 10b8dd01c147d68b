//! Behavioral examples every model has to reproduce.

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use tint::prelude::*;

const MAX_DISTANCE: f64 = 0.005;

mod rgb {
    use super::*;

    #[test]
    fn construction_and_equality() {
        let a = Rgb::rgba(1, 2, 3, 4);
        assert_eq!((a.red(), a.green(), a.blue(), a.alpha()), (1, 2, 3, 4));
        assert_eq!(a, Rgb::rgba(1, 2, 3, 4));
        assert_ne!(a, Rgb::rgba(1, 2, 5, 4));
        assert_ne!(a, Rgb::rgba(1, 2, 3, 5));

        for (r, g, b) in [(-1, 0, 0), (0, -1, 0), (0, 0, -1), (256, 0, 0), (0, 256, 0), (0, 0, 256)] {
            let err = Rgb::try_new(r, g, b, 0).unwrap_err();
            assert!(err.is_component_error(), "({r}, {g}, {b}) accepted");
        }
    }

    #[test]
    fn conversion_round_trips() {
        let a = Rgb::new(255, 100, 0);
        assert_abs_diff_eq!(a.to_hsv().to_rgb().distance(&a), 0.0, epsilon = MAX_DISTANCE);
        assert_abs_diff_eq!(a.to_hsl().to_rgb().distance(&a), 0.0, epsilon = MAX_DISTANCE);
        assert_abs_diff_eq!(a.to_cmyk().to_rgb().distance(&a), 0.0, epsilon = MAX_DISTANCE);
        assert_eq!(a.to_gray(), Gray::new(118));
        assert_eq!(a.to_rgb(), a);
    }

    #[test]
    fn hashing() {
        let a = Rgb::new(255, 255, 255);
        let b = Rgb::new(255, 0, 0);
        let c = Rgb::rgba(255, 255, 255, 128);
        let map: HashMap<Rgb, i32> = [(a, 1), (b, 2), (c, 3)].into_iter().collect();
        assert_eq!(map.get(&a), Some(&1));
        assert_eq!(map.get(&b), Some(&2));
        assert_eq!(map.get(&c), Some(&3));
        assert_eq!(map.get(&Rgb::new(255, 255, 255)), Some(&1));
        assert_eq!(map.get(&Rgb::new(128, 255, 255)), None);
    }

    #[test]
    fn blending() {
        let a = Rgb::new(255, 255, 255);
        let b = Rgb::new(255, 0, 0);
        let full = a.blend(&b, None, BlendMode::Interpolate).unwrap();
        assert_abs_diff_eq!(full.distance(&b), 0.0, epsilon = MAX_DISTANCE);
        let half = a.blend(&b, Some(128), BlendMode::Interpolate).unwrap();
        assert_abs_diff_eq!(half.distance(&Rgb::new(255, 128, 128)), 0.0, epsilon = MAX_DISTANCE);
    }

    #[test]
    fn persisted_form() {
        let a = Rgb::rgba(117, 243, 21, 93);
        assert_eq!(Rgb::from_bytes(&a.to_bytes()).unwrap(), a);
    }

    #[test]
    fn html_and_packed_forms() {
        assert_eq!(Rgb::from_html("#FF7F00").unwrap().to_html(), "#FF7F00");
        assert_eq!(Rgb::from_html("#f09").unwrap(), Rgb::new(255, 0, 153));
        assert!(Rgb::from_html("#ff7f0").unwrap_err().is_format_error());
        let c = Rgb::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_int(false), 0x0012_3456);
        assert_eq!(c.to_int(true), 0x7812_3456);
        assert_eq!(Rgb::from_int(0x7812_3456), c);
    }
}

/// Shared checks for the two float models.
macro_rules! hue_model_suite {
    ($name:ident, $ty:ident, $ctor:ident, $third:ident, $gray:expr, $opaque:expr) => {
        mod $name {
            use super::*;

            fn a() -> $ty {
                $ty::new(1.0, 1.0, 1.0).unwrap()
            }

            fn b() -> $ty {
                $ty::$ctor(0.5, 0.8, 0.3, 128).unwrap()
            }

            fn d() -> $ty {
                $ty::new(0.5, 0.8, 0.3).unwrap()
            }

            #[test]
            fn construction() {
                assert_abs_diff_eq!(a().hue(), 0.0);
                assert_abs_diff_eq!(a().saturation(), 1.0);
                assert_abs_diff_eq!(a().$third(), 1.0);
                assert_abs_diff_eq!(b().hue(), 0.5);
                assert_abs_diff_eq!(b().saturation(), 0.8);
                assert_abs_diff_eq!(b().$third(), 0.3);
                assert_eq!(b(), b());
                assert_ne!(a(), b());
                assert_ne!(b(), d());
                assert_ne!(a(), d());

                for (h, s, x) in
                    [(-0.1, 0.0, 0.0), (0.0, -0.1, 0.0), (0.0, 0.0, -0.1), (1.1, 0.0, 0.0), (0.0, 1.1, 0.0), (0.0, 0.0, 1.1)]
                {
                    assert!($ty::new(h, s, x).unwrap_err().is_component_error());
                }
            }

            #[test]
            fn conversion_round_trips() {
                let (h, s, x) = $opaque;
                for c in [$ty::new(h, s, x).unwrap(), b()] {
                    assert_abs_diff_eq!($ty::from_color(&c.to_rgb()).distance(&c), 0.0, epsilon = MAX_DISTANCE);
                    assert_abs_diff_eq!($ty::from_color(&c.to_hsv()).distance(&c), 0.0, epsilon = MAX_DISTANCE);
                    assert_abs_diff_eq!($ty::from_color(&c.to_hsl()).distance(&c), 0.0, epsilon = MAX_DISTANCE);
                    assert_abs_diff_eq!($ty::from_color(&c.to_cmyk()).distance(&c), 0.0, epsilon = MAX_DISTANCE);
                }
                assert_eq!(d().to_gray(), Gray::new($gray));
            }

            #[test]
            fn hashing() {
                let map: HashMap<$ty, i32> = [(a(), 1), (b(), 2), (d(), 3)].into_iter().collect();
                assert_eq!(map.get(&a()), Some(&1));
                assert_eq!(map.get(&b()), Some(&2));
                assert_eq!(map.get(&d()), Some(&3));
            }

            #[test]
            fn persisted_form() {
                for c in [a(), b(), d()] {
                    assert_eq!($ty::from_bytes(&c.to_bytes()).unwrap(), c);
                }
            }
        }
    };
}

hue_model_suite!(hsv, Hsv, hsva, value, 56, (1.0, 1.0, 1.0));
// At full luminance neither saturation nor hue survive a trip through RGB.
hue_model_suite!(hsl, Hsl, hsla, luminance, 97, (0.0, 0.0, 1.0));

mod algebra {
    use super::*;

    #[test]
    fn interpolation_boundaries() {
        let a = Rgb::rgba(10, 20, 30, 40);
        let b = Hsv::hsva(0.25, 0.5, 0.75, 200).unwrap();
        assert_eq!(a.interpolate(&b, 0.0).unwrap(), a);
        assert_eq!(a.interpolate(&b, 1.0).unwrap(), a.coerce(&b));
        assert!(a.interpolate(&b, 1.5).unwrap_err().to_string().contains("position"));
        assert!(a.interpolate(&b, -0.01).is_err());
    }

    #[test]
    fn identity_conversions() {
        let hsv = Hsv::new(0.3, 0.4, 0.5).unwrap();
        assert_eq!(hsv.to_hsv(), hsv);
        let hsl = Hsl::new(0.3, 0.4, 0.5).unwrap();
        assert_eq!(hsl.to_hsl(), hsl);
        let cmyk = Cmyk::cmyka(1, 2, 3, 4, 5);
        assert_eq!(cmyk.to_cmyk(), cmyk);
        let gray = Gray::gray_alpha(9, 8);
        assert_eq!(gray.to_gray(), gray);
        assert_eq!(Term::Cyan.to_term(), Term::Cyan);
    }

    #[test]
    fn cross_model_sequence() {
        let seq = Gray::new(0).sequence(&Rgb::new(255, 255, 255), 5).unwrap();
        let whites: Vec<u8> = seq.iter().map(Gray::white).collect();
        assert_eq!(whites, [0, 51, 102, 153, 204, 255]);
        assert!(Gray::new(0).sequence(&Gray::new(1), 0).is_err());
    }

    #[test]
    fn unsupported_blend_mode() {
        let err = Hsl::new(0.0, 0.0, 0.0)
            .unwrap()
            .blend(&Rgb::new(1, 1, 1), None, BlendMode::Multiply)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedBlendMode { .. }));
    }
}

mod mixer {
    use super::*;

    #[test]
    fn hue_shift_then_alpha() {
        let mut mixer = Rgb::new(255, 0, 0).to_mixer();
        mixer.set_hue(mixer.hue() + 1.0 / 3.0).unwrap();
        assert_eq!(mixer.to_rgb(), Rgb::new(0, 255, 0));
        mixer.set_alpha(i64::from(mixer.alpha()) + 128).unwrap();
        assert_eq!(mixer.to_rgb(), Rgb::rgba(0, 255, 0, 128));
    }

    #[test]
    fn cyclic_hue() {
        let mut mixer = Hsv::new(0.8, 0.5, 0.5).unwrap().to_mixer();
        mixer.set_hue(mixer.hue() + 0.4).unwrap();
        assert_abs_diff_eq!(mixer.hue(), 0.2, epsilon = 1e-9);
    }
}

mod any_color {
    use super::*;

    #[test]
    fn persisted_form_all_kinds() {
        let colors: [AnyColor; 7] = [
            Rgb::rgba(117, 243, 21, 93).into(),
            Hsv::hsva(0.5, 0.8, 0.3, 128).unwrap().into(),
            Hsl::hsla(0.5, 0.8, 0.3, 128).unwrap().into(),
            Cmyk::cmyka(0, 155, 255, 0, 7).into(),
            Gray::gray_alpha(118, 1).into(),
            Named::new("Periwinkle").unwrap().into(),
            Term::Yellow.into(),
        ];
        for c in colors {
            assert_eq!(AnyColor::from_bytes(&c.to_bytes()).unwrap(), c);
            let mut buf = Vec::new();
            c.write_to(&mut buf).unwrap();
            assert_eq!(AnyColor::read_from(&mut buf.as_slice()).unwrap(), c);
        }
    }

    #[test]
    fn spec_strings() {
        let c: AnyColor = "hsv:0.5,0.8,0.3,128".parse().unwrap();
        assert_eq!(c, AnyColor::Hsv(Hsv::hsva(0.5, 0.8, 0.3, 128).unwrap()));
        assert_eq!(c.convert(ColorKind::Gray), AnyColor::Gray(Gray::gray_alpha(56, 128)));
    }
}
