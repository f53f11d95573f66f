// Host-side tests for section visibility blending.

use ambient_core::color::mix;
use ambient_core::wash::resolve_ambient;
use ambient_core::*;

fn hex(s: &str) -> Rgb {
    Rgb::from_hex(s).unwrap()
}

const HOME: SectionKey = SectionKey(0);
const ARCHIVE: SectionKey = SectionKey(1);
const INSIGHTS: SectionKey = SectionKey(2);

fn blender(mode: MotionMode) -> (SectionBlender<AmbientSlot>, AmbientSlot, QueuedFrames) {
    let slot = AmbientSlot::new();
    let mut frames = QueuedFrames::new();
    let mut blender = SectionBlender::new(slot.clone(), Palette::default(), mode);
    blender.observe(HOME, "home");
    blender.observe(ARCHIVE, "archive");
    blender.observe(INSIGHTS, "insights");
    blender.start(&mut frames);
    (blender, slot, frames)
}

fn flush(blender: &mut SectionBlender<AmbientSlot>, frames: &mut QueuedFrames) {
    for _ in frames.drain() {
        blender.run_frame();
    }
}

#[test]
fn nothing_visible_falls_back_to_home() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    flush(&mut blender, &mut frames);
    assert_eq!(slot.color(), Some(hex("#10B981")));
}

#[test]
fn single_visible_section_is_exact() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    blender.report([(ARCHIVE, 0.3), (HOME, 0.0)], &mut frames);
    flush(&mut blender, &mut frames);
    assert_eq!(slot.color(), Some(hex("#4F46E5")));
}

#[test]
fn equal_ratios_meet_at_the_midpoint() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    blender.report([(HOME, 0.5), (ARCHIVE, 0.5)], &mut frames);
    flush(&mut blender, &mut frames);
    // home (16,185,129) and archive (79,70,229)
    assert_eq!(slot.color(), Some(Rgb::new(48, 128, 179)));
}

#[test]
fn weight_follows_relative_visibility() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    blender.report([(INSIGHTS, 0.75), (HOME, 0.25), (ARCHIVE, 0.1)], &mut frames);
    flush(&mut blender, &mut frames);
    let expected = mix(hex("#F59E0B"), hex("#10B981"), 0.25);
    assert_eq!(slot.color(), Some(expected));
}

#[test]
fn static_mode_never_blends() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Static);
    assert!(slot.reduced_motion_flag());
    blender.report([(HOME, 0.4), (ARCHIVE, 0.6)], &mut frames);
    flush(&mut blender, &mut frames);
    assert_eq!(slot.color(), Some(hex("#4F46E5")));
}

#[test]
fn ties_keep_report_order() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Static);
    blender.report([(INSIGHTS, 0.5), (ARCHIVE, 0.5)], &mut frames);
    flush(&mut blender, &mut frames);
    assert_eq!(slot.color(), Some(hex("#F59E0B")));

    // entries keep their first-report position even when updated later
    blender.report([(ARCHIVE, 0.5), (INSIGHTS, 0.5)], &mut frames);
    flush(&mut blender, &mut frames);
    assert_eq!(slot.color(), Some(hex("#F59E0B")));
}

#[test]
fn report_batches_coalesce_into_one_write() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    flush(&mut blender, &mut frames);
    let writes = slot.write_count();

    assert!(blender.report([(HOME, 0.2)], &mut frames));
    assert!(!blender.report([(HOME, 0.6)], &mut frames));
    assert!(!blender.report([(ARCHIVE, 0.0)], &mut frames));
    flush(&mut blender, &mut frames);

    assert_eq!(slot.write_count(), writes + 1);
    assert_eq!(blender.entry(HOME).map(|e| e.ratio), Some(0.6));
    assert_eq!(slot.color(), Some(hex("#10B981")));
}

#[test]
fn unobserved_sections_are_ignored() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    blender.report([(SectionKey(9), 1.0)], &mut frames);
    flush(&mut blender, &mut frames);
    assert!(blender.entry(SectionKey(9)).is_none());
    assert_eq!(slot.color(), Some(hex("#10B981")));

    blender.report([(ARCHIVE, 0.8)], &mut frames);
    blender.unobserve(ARCHIVE);
    blender.report([(ARCHIVE, 0.0)], &mut frames);
    flush(&mut blender, &mut frames);
    // the last report before unobserve is kept
    assert_eq!(blender.entry(ARCHIVE).map(|e| e.ratio), Some(0.8));
    assert_eq!(slot.color(), Some(hex("#4F46E5")));
}

#[test]
fn unknown_primary_id_uses_default_color() {
    let palette = Palette::default();
    let entries = [VisibilityEntry::new("press", 0.9)];
    assert_eq!(
        resolve_ambient(entries.iter(), &palette, MotionMode::Animated),
        hex("#10B981")
    );
}

#[test]
fn unknown_secondary_id_leaves_primary_untouched() {
    let palette = Palette::default();
    let entries = [
        VisibilityEntry::new("submit", 0.7),
        VisibilityEntry::new("press", 0.3),
    ];
    assert_eq!(
        resolve_ambient(entries.iter(), &palette, MotionMode::Animated),
        hex("#06B6D4")
    );
}

#[test]
fn mode_change_reblends_on_next_frame() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    blender.report([(HOME, 0.5), (ARCHIVE, 0.5)], &mut frames);
    flush(&mut blender, &mut frames);

    assert!(blender.set_mode(MotionMode::Static, &mut frames));
    assert!(slot.reduced_motion_flag());
    flush(&mut blender, &mut frames);
    assert_eq!(slot.color(), Some(hex("#10B981")));
}

#[test]
fn stop_cancels_and_clears_flag() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Static);
    blender.report([(HOME, 1.0)], &mut frames);
    assert_eq!(frames.pending(), 1);

    blender.stop(&mut frames);
    blender.stop(&mut frames);
    assert_eq!(frames.pending(), 0);
    assert!(!slot.reduced_motion_flag());
    assert!(!blender.is_observing(HOME));
    assert_eq!(blender.run_frame(), None);
    assert!(!blender.report([(HOME, 0.5)], &mut frames));
}

#[test]
fn custom_palette_overrides_defaults() {
    let mut palette =
        Palette::from_hex_pairs([("intro", "#000000"), ("outro", "#ffffff")], "intro").unwrap();
    assert_eq!(palette.color("missing"), Rgb::new(0, 0, 0));
    palette.insert("intro", Rgb::new(1, 2, 3));
    assert_eq!(palette.color("missing"), Rgb::new(1, 2, 3));
    assert!(Palette::from_hex_pairs([("bad", "#zzzzzz")], "bad").is_err());
}

#[test]
fn stop_right_after_start_cancels_the_first_frame() {
    let (mut blender, slot, mut frames) = blender(MotionMode::Animated);
    assert!(blender.has_pending_frame());
    assert_eq!(frames.pending(), 1);

    // release every section one by one, then stop, as teardown does
    for key in [HOME, ARCHIVE, INSIGHTS] {
        blender.unobserve(key);
    }
    blender.stop(&mut frames);
    assert!(!blender.has_pending_frame());
    assert_eq!(frames.pending(), 0);
    assert!(frames.drain().is_empty());
    assert_eq!(slot.color(), None);
}
