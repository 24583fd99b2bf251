use super::*;
use crate::viewport::{BlendMode, Color};

fn size() -> ContainerSize {
    ContainerSize::new(1200, 900)
}

fn stereo_regions(viewports: &[ViewportSpec]) -> Vec<ScreenRect> {
    viewports
        .iter()
        .filter(|spec| spec.is_stereo())
        .map(|spec| spec.region)
        .collect()
}

fn observer_regions(viewports: &[ViewportSpec]) -> Vec<&ViewportSpec> {
    viewports
        .iter()
        .filter(|spec| spec.camera == CameraRef::Observer)
        .collect()
}

// ============================================================================
// Region count and overlap
// ============================================================================

#[test]
fn test_side_by_side_regions_do_not_overlap() {
    let viewports = route_viewports(ViewMode::SideBySide, size(), &CompositingOptions::default());
    let stereo = stereo_regions(&viewports);

    assert_eq!(stereo.len(), 2);
    assert_eq!(stereo[0].overlap_area(&stereo[1]), 0);
    assert_eq!(stereo[0], ScreenRect::new(0, 0, 600, 600));
    assert_eq!(stereo[1], ScreenRect::new(600, 0, 600, 600));
}

#[test]
fn test_stacked_modes_fully_overlap() {
    for mode in [ViewMode::Overlay, ViewMode::Anaglyph] {
        let viewports = route_viewports(mode, size(), &CompositingOptions::default());
        let stereo = stereo_regions(&viewports);

        assert_eq!(stereo.len(), 2, "{}", mode);
        assert_eq!(stereo[0], stereo[1]);
        assert_eq!(stereo[0].overlap_area(&stereo[1]), stereo[0].area());
        assert_eq!(stereo[0], ScreenRect::new(0, 0, 1200, 600));
    }
}

#[test]
fn test_every_mode_has_one_observer_region() {
    for mode in ViewMode::ALL {
        let viewports = route_viewports(mode, size(), &CompositingOptions::default());
        assert_eq!(viewports.len(), 3);
        assert_eq!(observer_regions(&viewports).len(), 1, "{}", mode);
    }
}

#[test]
fn test_observer_region_is_fixed_across_modes() {
    let options = CompositingOptions::default();
    let expected = ScreenRect::new(0, 600, 1200, 300);

    for mode in ViewMode::ALL {
        let viewports = route_viewports(mode, size(), &options);
        let observer = observer_regions(&viewports)[0];
        assert_eq!(observer.region, expected);
        assert_eq!(observer.blend, BlendMode::Opaque);
        assert_eq!(observer.opacity, 1.0);
        assert!(observer.tint.is_none());
    }
}

#[test]
fn test_observer_does_not_overlap_stereo_band() {
    for mode in ViewMode::ALL {
        let viewports = route_viewports(mode, size(), &CompositingOptions::default());
        let observer = observer_regions(&viewports)[0].region;
        for region in stereo_regions(&viewports) {
            assert_eq!(region.overlap_area(&observer), 0);
        }
    }
}

// ============================================================================
// Blend and tint
// ============================================================================

#[test]
fn test_side_by_side_is_opaque_and_untinted() {
    let viewports = route_viewports(ViewMode::SideBySide, size(), &CompositingOptions::default());
    for spec in &viewports {
        assert_eq!(spec.blend, BlendMode::Opaque);
        assert!(spec.tint.is_none());
    }
}

#[test]
fn test_overlay_tints_and_layering() {
    let viewports = route_viewports(ViewMode::Overlay, size(), &CompositingOptions::default());
    let left = &viewports[0];
    let right = &viewports[1];

    assert_eq!(left.camera, CameraRef::LeftEye);
    assert_eq!(right.camera, CameraRef::RightEye);
    assert!(right.z_order > left.z_order);
    assert!(right.opacity < left.opacity);
    assert_eq!(left.blend, BlendMode::Additive);

    let left_tint = left.tint.unwrap();
    let right_tint = right.tint.unwrap();
    assert_eq!(left_tint.color, Color::CYAN);
    assert_eq!(right_tint.color, Color::RED);
    assert_eq!(left_tint.blend, BlendMode::Additive);
    assert!(left_tint.opacity < 1.0);
}

#[test]
fn test_anaglyph_uses_complementary_multiplicative_tints() {
    let viewports = route_viewports(ViewMode::Anaglyph, size(), &CompositingOptions::default());
    let left_tint = viewports[0].tint.unwrap();
    let right_tint = viewports[1].tint.unwrap();

    assert_eq!(left_tint.color, Color::RED);
    assert_eq!(right_tint.color, Color::CYAN);
    assert_eq!(left_tint.blend, BlendMode::Multiply);
    assert_eq!(right_tint.blend, BlendMode::Multiply);
    assert_eq!(left_tint.opacity, 1.0);
    assert_eq!(right_tint.opacity, 1.0);

    // Right eye layer sits translucent over the left one
    assert_eq!(viewports[0].opacity, 1.0);
    assert!(viewports[1].opacity < viewports[0].opacity);
    assert_eq!(viewports[1].opacity, 0.5);
}

#[test]
fn test_overlay_and_anaglyph_share_layout() {
    let options = CompositingOptions::default();
    let overlay = route_viewports(ViewMode::Overlay, size(), &options);
    let anaglyph = route_viewports(ViewMode::Anaglyph, size(), &options);

    for (a, b) in overlay.iter().zip(anaglyph.iter()) {
        assert_eq!(a.camera, b.camera);
        assert_eq!(a.region, b.region);
        assert_eq!(a.z_order, b.z_order);
    }
}

#[test]
fn test_viewports_in_ascending_z_order() {
    for mode in ViewMode::ALL {
        let viewports = route_viewports(mode, size(), &CompositingOptions::default());
        assert!(viewports.windows(2).all(|w| w[0].z_order <= w[1].z_order));
    }
}

// ============================================================================
// Layout edge cases
// ============================================================================

#[test]
fn test_odd_width_halves_tile_exactly() {
    let viewports = route_viewports(
        ViewMode::SideBySide,
        ContainerSize::new(1001, 600),
        &CompositingOptions::default(),
    );
    let stereo = stereo_regions(&viewports);
    assert_eq!(stereo[0].width + stereo[1].width, 1001);
    assert_eq!(stereo[0].right(), stereo[1].x as u64);
    assert_eq!(stereo[0].overlap_area(&stereo[1]), 0);
}

#[test]
fn test_bands_tile_container() {
    for height in [0_u32, 1, 2, 3, 599, 600, 1081] {
        let (stereo, observer) = split_bands(ContainerSize::new(800, height), 1.0 / 3.0);
        assert_eq!(stereo.height + observer.height, height);
        assert_eq!(stereo.bottom(), observer.y as u64);
    }
}

#[test]
fn test_zero_size_container() {
    for mode in ViewMode::ALL {
        let viewports = route_viewports(mode, ContainerSize::new(0, 0), &CompositingOptions::default());
        assert_eq!(viewports.len(), 3);
        assert!(viewports.iter().all(|spec| spec.region.is_empty()));
    }
}

#[test]
fn test_observer_fraction_bounds() {
    let (stereo, observer) = split_bands(size(), 0.0);
    assert_eq!(stereo.height, 900);
    assert!(observer.is_empty());

    let (stereo, observer) = split_bands(size(), 1.0);
    assert!(stereo.is_empty());
    assert_eq!(observer.height, 900);

    let (stereo, _) = split_bands(size(), f32::NAN);
    assert_eq!(stereo.height, 900);
}

// ============================================================================
// Router state machine
// ============================================================================

#[test]
fn test_router_starts_with_layout() {
    let router = ViewportRouter::new(ViewMode::SideBySide, size(), CompositingOptions::default());
    assert_eq!(router.mode(), ViewMode::SideBySide);
    assert_eq!(router.viewports().len(), 3);
    assert_eq!(router.rebuild_count(), 1);
}

#[test]
fn test_router_rebuilds_only_on_change() {
    let mut router = ViewportRouter::new(ViewMode::SideBySide, size(), CompositingOptions::default());

    assert!(!router.set_mode(ViewMode::SideBySide));
    assert!(!router.resize(size()));
    assert_eq!(router.rebuild_count(), 1);

    assert!(router.set_mode(ViewMode::Anaglyph));
    assert_eq!(router.rebuild_count(), 2);
    assert!(router.resize(ContainerSize::new(640, 480)));
    assert_eq!(router.rebuild_count(), 3);
}

#[test]
fn test_router_matches_pure_routing() {
    let options = CompositingOptions::default();
    let mut router = ViewportRouter::new(ViewMode::SideBySide, size(), options.clone());
    router.set_mode(ViewMode::Overlay);
    router.resize(ContainerSize::new(1920, 1080));

    let expected = route_viewports(ViewMode::Overlay, ContainerSize::new(1920, 1080), &options);
    assert_eq!(router.viewports(), expected.as_slice());
}

#[test]
fn test_router_viewport_lookup() {
    let router = ViewportRouter::new(ViewMode::SideBySide, size(), CompositingOptions::default());
    let observer = router.viewport_for(CameraRef::Observer).unwrap();
    assert_eq!(observer.z_order, Z_OBSERVER);
    assert_eq!(router.viewport_for(CameraRef::LeftEye).unwrap().z_order, Z_LEFT_EYE);
}

#[test]
fn test_router_set_options_rebuilds() {
    let mut router = ViewportRouter::new(ViewMode::Overlay, size(), CompositingOptions::default());
    let mut options = CompositingOptions::default();
    options.overlay.right_opacity = 0.25;
    router.set_options(options);

    assert_eq!(router.rebuild_count(), 2);
    assert_eq!(router.viewport_for(CameraRef::RightEye).unwrap().opacity, 0.25);
}

// ============================================================================
// ViewMode parsing
// ============================================================================

#[test]
fn test_view_mode_parse_and_display() {
    for mode in ViewMode::ALL {
        assert_eq!(mode.to_string().parse::<ViewMode>(), Ok(mode));
    }
    assert_eq!("side-by-side".parse::<ViewMode>(), Ok(ViewMode::SideBySide));
    assert_eq!(" Anaglyph ".parse::<ViewMode>(), Ok(ViewMode::Anaglyph));
    assert!("stereo".parse::<ViewMode>().is_err());
    assert!(!ViewMode::SideBySide.is_stacked());
    assert!(ViewMode::Overlay.is_stacked());
}
