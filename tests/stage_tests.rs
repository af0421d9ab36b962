// Host-side tests for the scroll card stage.
// Every stage output is a pure function of progress, so these are exact
// snapshots at chosen progress values.

use folio_core::constants::*;
use folio_core::*;

const N: usize = 4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// offsets are scaled by up to a few hundred px, so allow more slack
fn approx_px(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

#[test]
fn segments_partition_progress_into_n_plus_three() {
    let stage = CardStage::new(N);
    assert_eq!(stage.segment_count(), 7);
    assert_eq!(stage.folder_segment().start, 0.0);
    assert_eq!(stage.zoom_segment().end, 1.0);
    for k in 0..stage.segment_count() - 1 {
        assert_eq!(stage.segment(k).end, stage.segment(k + 1).start);
    }
    let item0 = stage.item_segment(0);
    assert!(approx(item0.start, 1.0 / 7.0));
    assert!(approx(item0.end, 2.0 / 7.0));
    assert_eq!(stage.cover_segment(), stage.segment(N + 1));
}

#[test]
fn at_zero_nothing_has_entered() {
    let stage = CardStage::new(N);
    let frame = stage.frame(0.0);
    assert!(frame.phases.iter().all(|p| *p == ItemPhase::PreEntry));
    for card in &frame.cards {
        assert_eq!(card.opacity, 0.0);
        assert_eq!(card.rotation_deg, 0.0);
        assert_eq!(card.offset_x, 0.0);
    }
    assert_eq!(frame.folder.opacity, 0.0);
    assert_eq!(frame.cover.opacity, 0.0);
    assert_eq!(frame.stack.opacity, 1.0);
}

#[test]
fn at_one_every_card_is_fanned_and_stack_is_gone() {
    let stage = CardStage::new(N);
    let frame = stage.frame(1.0);
    assert!(frame.phases.iter().all(|p| *p == ItemPhase::Fanned));
    for (i, card) in frame.cards.iter().enumerate() {
        assert_eq!(*card, CardStage::fan_pose(i));
        assert!(card.rotation_deg != 0.0);
        assert!(card.offset_x != 0.0);
    }
    assert_eq!(frame.stack.opacity, 0.0);
    assert!(approx(frame.stack.scale, STAGE_FINAL_SCALE));
    assert!(approx_px(frame.stack.offset_x, STAGE_FINAL_DRIFT_X));
    assert_eq!(frame.cover, AnimationParams::REST);
    assert!(frame.texts.iter().all(|t| t.opacity == 0.0));
}

#[test]
fn half_way_through_folder_segment_no_item_has_entered() {
    let stage = CardStage::new(N);
    let p = 0.5 / 7.0;
    let frame = stage.frame(p);
    assert!(frame.phases.iter().all(|ph| *ph == ItemPhase::PreEntry));
    assert!(approx(frame.folder.opacity, 0.5));
    assert!(approx_px(frame.folder.offset_y, STAGE_FOLDER_ENTRY_OFFSET * 0.5));
}

#[test]
fn first_item_mid_entry() {
    let stage = CardStage::new(N);
    let p = (1.0 + STAGE_ENTRY_FRACTION * 0.5) / 7.0;
    assert_eq!(stage.phase(0, p), ItemPhase::Entry);
    for i in 1..N {
        assert_eq!(stage.phase(i, p), ItemPhase::PreEntry);
    }
    let card = stage.params_for(0, p);
    assert!(approx(card.opacity, 0.5));
    assert!(approx_px(card.offset_y, STAGE_CARD_ENTRY_OFFSET * 0.5));
    assert!(approx(card.scale, (STAGE_ENTRY_SCALE + 1.0) * 0.5));
    let text = stage.text_params(0, p);
    assert!(approx(text.opacity, 0.5));
    assert!(approx_px(text.offset_y, STAGE_TEXT_ENTRY_OFFSET * 0.5));
}

#[test]
fn settled_item_holds_rest_pose() {
    let stage = CardStage::new(N);
    let seg = stage.item_segment(1);
    let p = seg.at(0.5);
    assert_eq!(stage.phase(1, p), ItemPhase::Settled);
    assert_eq!(stage.params_for(1, p), AnimationParams::REST);
    assert_eq!(stage.text_params(1, p), AnimationParams::REST);
    // earlier item already fanned, later ones not yet in
    assert_eq!(stage.phase(0, p), ItemPhase::Fanned);
    assert_eq!(stage.phase(2, p), ItemPhase::PreEntry);
}

#[test]
fn boundary_belongs_to_later_segment() {
    let stage = CardStage::new(N);
    let boundary = stage.item_segment(1).start;
    assert_eq!(boundary, stage.item_segment(0).end);
    assert_eq!(stage.phase(0, boundary), ItemPhase::Fanned);
    assert_eq!(stage.phase(1, boundary), ItemPhase::Entry);
    // start state of the entry
    assert_eq!(stage.params_for(1, boundary).opacity, 0.0);
    assert_eq!(stage.text_params(0, boundary).opacity, 0.0);
}

#[test]
fn exactly_one_phase_consistent_with_bounds() {
    let stage = CardStage::new(N);
    for step in 0..=1000 {
        let p = step as f32 / 1000.0;
        for i in 0..N {
            let seg = stage.item_segment(i);
            let expected = if p < seg.start {
                ItemPhase::PreEntry
            } else if p >= seg.end {
                ItemPhase::Fanned
            } else if p < seg.at(STAGE_ENTRY_FRACTION) {
                ItemPhase::Entry
            } else {
                ItemPhase::Settled
            };
            assert_eq!(stage.phase(i, p), expected, "item {i} at p={p}");
        }
    }
}

#[test]
fn phases_only_move_forward_with_progress() {
    let stage = CardStage::new(N);
    let rank = |ph: ItemPhase| match ph {
        ItemPhase::PreEntry => 0,
        ItemPhase::Entry => 1,
        ItemPhase::Settled => 2,
        ItemPhase::Fanned => 3,
    };
    for i in 0..N {
        let mut last = 0;
        for step in 0..=700 {
            let r = rank(stage.phase(i, step as f32 / 700.0));
            assert!(r >= last);
            last = r;
        }
        assert_eq!(last, 3);
    }
}

#[test]
fn text_does_not_persist_but_card_does() {
    let stage = CardStage::new(N);
    let after = stage.item_segment(3).start;
    for i in 0..3 {
        assert_eq!(stage.text_params(i, after).opacity, 0.0);
        assert_eq!(stage.params_for(i, after).opacity, 1.0);
    }
    // text fades out inside its own segment
    let seg = stage.item_segment(2);
    let late = seg.at(1.0 - STAGE_TEXT_EXIT_FRACTION * 0.5);
    assert!(approx(stage.text_params(2, late).opacity, 0.5));
    assert_eq!(stage.params_for(2, late), AnimationParams::REST);
}

#[test]
fn fan_grows_with_ordinal() {
    let a = CardStage::fan_pose(0);
    let b = CardStage::fan_pose(3);
    assert!(approx(a.rotation_deg, STAGE_FAN_ROTATION_DEG));
    assert!(approx(b.rotation_deg, STAGE_FAN_ROTATION_DEG * 4.0));
    assert!(approx_px(b.offset_x, STAGE_FAN_OFFSET_X * 4.0));
    assert!(approx_px(b.offset_y, STAGE_FAN_OFFSET_Y * 4.0));
}

#[test]
fn cover_closes_in_its_segment() {
    let stage = CardStage::new(N);
    let seg = stage.cover_segment();
    assert_eq!(stage.cover_params(seg.start - 0.01).opacity, 0.0);
    let mid = stage.cover_params(seg.at(0.5));
    assert!(approx(mid.opacity, 0.5));
    assert!(approx_px(mid.offset_y, STAGE_COVER_ENTRY_OFFSET * 0.5));
    assert_eq!(stage.cover_params(seg.end), AnimationParams::REST);
}

#[test]
fn stack_zooms_out_only_in_last_segment() {
    let stage = CardStage::new(N);
    let zoom = stage.zoom_segment();
    assert_eq!(stage.stack_params(zoom.start), AnimationParams::REST);
    assert_eq!(stage.stack_params(0.3), AnimationParams::REST);
    let mid = stage.stack_params(zoom.at(0.5));
    assert!(approx(mid.opacity, 0.5));
    assert!(approx(mid.scale, (1.0 + STAGE_FINAL_SCALE) * 0.5));
}

#[test]
fn output_is_deterministic_and_clamped() {
    let stage = CardStage::new(N);
    for p in [0.0, 0.1, 0.33, 0.5, 0.77, 1.0] {
        assert_eq!(stage.frame(p), stage.frame(p));
    }
    assert_eq!(stage.frame(-1.0), stage.frame(0.0));
    assert_eq!(stage.frame(2.0), stage.frame(1.0));
    assert_eq!(stage.frame(f32::NAN), stage.frame(0.0));
}

#[test]
fn empty_stage_still_has_folder_cover_and_zoom() {
    let stage = CardStage::new(0);
    assert_eq!(stage.segment_count(), 3);
    let frame = stage.frame(1.0);
    assert!(frame.cards.is_empty() && frame.texts.is_empty());
    assert_eq!(frame.stack.opacity, 0.0);
}

#[test]
fn scroll_progress_maps_region_travel() {
    // 3000px region in a 1000px viewport travels 2000px
    assert_eq!(scroll_progress(200.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert!(approx(scroll_progress(-1000.0, 3000.0, 1000.0), 0.5));
    assert_eq!(scroll_progress(-2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-5000.0, 3000.0, 1000.0), 1.0);
    // no travel: before or after
    assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(-10.0, 800.0, 1000.0), 1.0);
}

#[test]
fn css_strings() {
    let p = AnimationParams {
        opacity: 0.5,
        offset_x: 1.0,
        offset_y: -2.5,
        rotation_deg: 3.0,
        scale: 0.92,
    };
    assert_eq!(
        p.transform_css(),
        "translate3d(1.00px, -2.50px, 0) rotate(3.00deg) scale(0.9200)"
    );
    assert_eq!(p.opacity_css(), "0.5000");
}

#[test]
fn project_list_is_ordered_and_complete() {
    assert_eq!(PROJECTS.len(), 4);
    for (i, item) in PROJECTS.iter().enumerate() {
        assert_eq!(item.ordinal, i);
        assert!(!item.title.is_empty());
        assert!(!item.tags.is_empty());
        assert!(item.link.starts_with("https://"));
        assert!(item.image.starts_with("/images/"));
    }
}
