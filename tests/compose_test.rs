//! Rename planning scenarios.

mod common;

use assert_matches::assert_matches;
use common::{group, legacy_settings, show, TestHarness};
use showforged::compose::PatternWarning;
use showforged::config::{RenamerSettings, ThumbNaming};
use showforged::model::{Episode, EpisodeFileGroup, MediaFile, SubtitleStream};
use showforged::{PlannedRename, RenameOp};
use showforged_common::{Error, MediaFileType};

#[test]
fn test_single_episode_round_trip() {
    let h = TestHarness::with_settings(legacy_settings());
    let show = show("singleshow", 2009);
    let group = group(
        vec![Episode::new(1, 2, "singleEP")],
        &["singleshow.s01e02.mkv"],
    );

    assert_eq!(
        h.targets(&show, &group),
        vec!["singleshow (2009)/Season 1/singleshow - S01E02 - singleEP.mkv"]
    );
}

#[test]
fn test_multi_episode_round_trip() {
    let h = TestHarness::with_settings(legacy_settings());
    let show = show("multishow", 2009);
    let group = group(
        vec![
            Episode::new(1, 3, "multiEP3"),
            Episode::new(1, 2, "multiEP2"),
            Episode::new(1, 2, "multiEP2"),
        ],
        &["multishow.s01e02.s01e03.avi"],
    );

    assert_eq!(
        h.targets(&show, &group),
        vec!["multishow (2009)/Season 1/multishow - S01E02 S01E03 - multiEP2 - multiEP3.avi"]
    );
}

#[test]
fn test_stacked_files_keep_markers() {
    let h = TestHarness::new();
    let show = show("stackshow", 2009);
    let group = group(
        vec![Episode::new(1, 1, "Pilot")],
        &["stackshow.S01E01.part1.mkv", "stackshow.S01E01.part2.mkv"],
    );

    assert_eq!(
        h.targets(&show, &group),
        vec![
            "stackshow (2009)/Season 1/stackshow - S01E01 - Pilot.part1.mkv",
            "stackshow (2009)/Season 1/stackshow - S01E01 - Pilot.part2.mkv",
        ]
    );
}

#[test]
fn test_episode_files() {
    let settings = RenamerSettings {
        thumb_naming: vec![ThumbNaming::FilenameThumb, ThumbNaming::Filename],
        ..Default::default()
    };
    let h = TestHarness::with_settings(settings);
    let show = show("Show", 2010);
    let mut group = group(
        vec![Episode::new(2, 5, "Title")],
        &[
            "old/show.205.mkv",
            "old/show.205.nfo",
            "old/show.205-thumb.jpeg",
            "old/show.205.ger.srt",
        ],
    );
    group.files.push(MediaFile {
        subtitles: vec![SubtitleStream {
            language: "en".to_string(),
            forced: true,
        }],
        ..MediaFile::new("old/english.sub")
    });

    let plan = h.composer().compose(&show, &group).unwrap();
    let base = "Season 2/Show - S02E05 - Title";
    let expected = [
        ("old/show.205.mkv", format!("{}.mkv", base), RenameOp::Move),
        ("old/show.205.nfo", format!("{}.nfo", base), RenameOp::Copy),
        ("old/show.205-thumb.jpeg", format!("{}-thumb.jpg", base), RenameOp::Copy),
        ("old/show.205-thumb.jpeg", format!("{}.jpg", base), RenameOp::Copy),
        ("old/show.205.ger.srt", format!("{}.ger.srt", base), RenameOp::Move),
        ("old/english.sub", format!("{}.en.forced.sub", base), RenameOp::Move),
    ];
    let expected: Vec<PlannedRename> = expected
        .into_iter()
        .map(|(source, target, op)| PlannedRename {
            source: source.to_string(),
            target,
            op,
        })
        .collect();

    assert_eq!(plan.show_folder, "Show (2010)");
    assert_eq!(plan.season_folder, "Season 2");
    assert_eq!(plan.renames, expected);
    assert!(plan.warnings.is_empty());
}

#[test]
fn test_disc_episode_moves_folder() {
    let h = TestHarness::new();
    let show = show("discshow", 2001);
    let group = group(
        vec![Episode::new(1, 1, "Pilot")],
        &[
            "discshow.s01e01/VIDEO_TS/VIDEO_TS.VOB",
            "discshow.s01e01/VIDEO_TS/VTS_01_1.VOB",
            "discshow.s01e01-thumb.jpg",
        ],
    );

    let plan = h.composer().compose(&show, &group).unwrap();
    assert_eq!(
        plan.renames,
        vec![
            PlannedRename {
                source: "discshow.s01e01".to_string(),
                target: "Season 1/discshow - S01E01 - Pilot".to_string(),
                op: RenameOp::MoveDirectory,
            },
            PlannedRename {
                source: "discshow.s01e01-thumb.jpg".to_string(),
                target: "Season 1/discshow - S01E01 - Pilot-thumb.jpg".to_string(),
                op: RenameOp::Copy,
            },
        ]
    );
}

#[test]
fn test_stacked_disc_folders_keep_their_marker() {
    let h = TestHarness::new();
    let show = show("discshow", 2001);
    let group = group(
        vec![Episode::new(1, 1, "Pilot")],
        &[
            "Pilot.CD1/VIDEO_TS/VIDEO_TS.IFO",
            "Pilot.CD1/VIDEO_TS/VTS_01_1.VOB",
            "Pilot.CD2/VIDEO_TS/VIDEO_TS.IFO",
            "Pilot Disc 3/BDMV/index.bdmv",
        ],
    );

    let plan = h.composer().compose(&show, &group).unwrap();
    let moved: Vec<(&str, &str)> = plan
        .renames
        .iter()
        .map(|r| (r.source.as_str(), r.target.as_str()))
        .collect();
    assert_eq!(
        moved,
        vec![
            ("Pilot.CD1", "Season 1/discshow - S01E01 - Pilot.CD1"),
            ("Pilot.CD2", "Season 1/discshow - S01E01 - Pilot.CD2"),
            ("Pilot Disc 3", "Season 1/discshow - S01E01 - Pilot.Disc 3"),
        ]
    );
    assert!(plan
        .renames
        .iter()
        .all(|r| r.op == RenameOp::MoveDirectory));
}

#[test]
fn test_unstacked_disc_folders_conflict() {
    let h = TestHarness::new();
    let group = group(
        vec![Episode::new(1, 1, "Pilot")],
        &["first/VIDEO_TS/VIDEO_TS.IFO", "second/VIDEO_TS/VIDEO_TS.IFO"],
    );
    assert_matches!(
        h.composer().compose(&show("discshow", 2001), &group),
        Err(Error::InvalidInput(_))
    );
}

#[test]
fn test_disc_file_outside_episode_folder() {
    let h = TestHarness::new();
    let group = group(vec![Episode::new(1, 1, "")], &["VIDEO_TS/VIDEO_TS.VOB"]);
    assert_matches!(
        h.composer().compose(&show("Show", 2001), &group),
        Err(Error::InvalidInput(_))
    );
}

#[test]
fn test_blank_folder_patterns() {
    let settings = RenamerSettings {
        show_folder_pattern: String::new(),
        season_folder_pattern: String::new(),
        file_pattern: "${showTitle} - ${episodeNr2}".to_string(),
        ..Default::default()
    };
    let h = TestHarness::with_settings(settings);
    let show = show("Old Folder", 2001);
    let group = group(vec![Episode::new(3, 1, "")], &["x.mkv"]);

    assert_eq!(
        h.targets(&show, &group),
        vec!["Old Folder/Season 3/Old Folder - 01.mkv"]
    );

    // the season number is in the file name, so no season folder
    let settings = RenamerSettings {
        season_folder_pattern: String::new(),
        file_pattern: "${showTitle} ${seasonNr}x${episodeNr2}".to_string(),
        ..Default::default()
    };
    let h = TestHarness::with_settings(settings);
    assert_eq!(
        h.targets(&show, &group),
        vec!["Old Folder (2001)/Old Folder 3x01.mkv"]
    );
}

#[test]
fn test_illegal_characters_and_ascii() {
    let settings = RenamerSettings {
        ascii_replacement: true,
        space_substitution: true,
        space_replacement: ".".to_string(),
        ..Default::default()
    };
    let h = TestHarness::with_settings(settings);
    let mut show = show("Die Gummibärenbande", 1985);
    show.year = None;
    let group = group(
        vec![Episode::new(1, 1, "Wer? Wie: Was / Warum")],
        &["gummi.mkv"],
    );

    assert_eq!(
        h.targets(&show, &group),
        vec!["Die.Gummibaerenbande/Season.1/Die.Gummibaerenbande.-.S01E01.-.Wer.Wie.Was.Warum.mkv"]
    );
}

#[test]
fn test_correct_names_are_skipped() {
    let h = TestHarness::new();
    let show = show("Show", 2001);
    let group = group(
        vec![Episode::new(1, 1, "Pilot")],
        &["Season 1/Show - S01E01 - Pilot.mkv"],
    );

    let plan = h.composer().compose(&show, &group).unwrap();
    assert!(plan.renames.is_empty());
}

#[test]
fn test_pattern_warnings_are_attached() {
    let settings = RenamerSettings {
        file_pattern: "${showTitle} - ${title}".to_string(),
        ..Default::default()
    };
    let h = TestHarness::with_settings(settings);
    let group = group(vec![Episode::new(1, 1, "Pilot")], &["a.mkv"]);

    let plan = h.composer().compose(&show("Show", 2001), &group).unwrap();
    assert_eq!(
        plan.warnings,
        vec![PatternWarning::EpisodeTokens { found: 0 }]
    );
}

#[test]
fn test_compose_errors() {
    let show = show("Show", 2001);
    let ok_group = group(vec![Episode::new(1, 1, "Pilot")], &["a.mkv"]);

    let empty = TestHarness::with_settings(RenamerSettings {
        file_pattern: "  ".to_string(),
        ..Default::default()
    });
    assert_matches!(
        empty.composer().compose(&show, &ok_group),
        Err(Error::InvalidTemplate(_))
    );

    let h = TestHarness::new();
    let untitled = showforged::model::TvShow::default();
    assert_matches!(
        h.composer().compose(&untitled, &ok_group),
        Err(Error::Incomplete(_))
    );
    assert_matches!(
        h.composer().compose(&show, &EpisodeFileGroup::default()),
        Err(Error::Incomplete(_))
    );
    assert_matches!(
        h.composer()
            .compose(&show, &group(vec![Episode::new(-1, 1, "")], &["a.mkv"])),
        Err(Error::Incomplete(_))
    );

    let codec_only = TestHarness::with_settings(RenamerSettings {
        file_pattern: "${videoCodec}".to_string(),
        ..Default::default()
    });
    assert_matches!(
        codec_only.composer().compose(&show, &ok_group),
        Err(Error::Incomplete(_))
    );
}

#[test]
fn test_conflicting_targets() {
    let h = TestHarness::new();
    let group = group(
        vec![Episode::new(1, 1, "Pilot")],
        &["a.mkv", "b.srt", "c.srt"],
    );
    assert_matches!(
        h.composer().compose(&show("Show", 2001), &group),
        Err(Error::InvalidInput(_))
    );
}

#[test]
fn test_explicit_file_types() {
    let h = TestHarness::new();
    let mut group = group(vec![Episode::new(1, 1, "Pilot")], &["a.mkv"]);
    group.files.push(MediaFile {
        file_type: Some(MediaFileType::Trailer),
        ..MediaFile::new("preview.mkv")
    });

    assert_eq!(
        h.targets(&show("Show", 2001), &group),
        vec![
            "Show (2001)/Season 1/Show - S01E01 - Pilot.mkv",
            "Show (2001)/Season 1/Show - S01E01 - Pilot-trailer.mkv",
        ]
    );
}
