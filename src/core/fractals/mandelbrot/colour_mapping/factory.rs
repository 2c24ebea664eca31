use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{
        blue_white_gradient::MandelbrotBlueWhiteGradient, fire_gradient::MandelbrotFireGradient,
        hue_cycle::MandelbrotHueCycle,
    },
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::HueCycle => Box::new(MandelbrotHueCycle::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
    use crate::core::data::colour::Colour;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn every_kind_paints_the_set_black() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 64);
            assert_eq!(map.map(64), Ok(Colour::BLACK), "{kind}");
        }
    }

    #[test]
    fn every_kind_keeps_escaped_counts_off_black() {
        for &kind in MandelbrotColourMapKinds::ALL {
            for max_iterations in [1, 2, 100, 10_000] {
                let map = mandelbrot_colour_map_factory(kind, max_iterations);

                assert_ne!(map.map(0), Ok(Colour::BLACK), "{kind} at {max_iterations}");
                assert_ne!(
                    map.map(max_iterations - 1),
                    Ok(Colour::BLACK),
                    "{kind} at {max_iterations}"
                );
            }
        }
    }

    #[test]
    fn every_kind_rejects_counts_past_max() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 64);
            assert!(map.map(65).is_err(), "{kind}");
        }
    }
}
