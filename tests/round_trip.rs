use bvh_csv::batch::{run_compose, run_extract};
use bvh_csv::parse::load_hierarchy_from_file;
use bvh_csv::ConvertOptions;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const HIERARCHY: &str = "HIERARCHY
ROOT Hips
{
\tOFFSET 0.000000 0.000000 0.000000
\tCHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation
\tJOINT LeftUpLeg
\t{
\t\tOFFSET 3.910000 0.000000 0.000000
\t\tCHANNELS 3 Zrotation Yrotation Xrotation
\t\tJOINT LeftLeg
\t\t{
\t\t\tOFFSET 0.000000 -18.340000 0.000000
\t\t\tCHANNELS 3 Zrotation Yrotation Xrotation
\t\t\tEnd Site
\t\t\t{
\t\t\t\tOFFSET 0.000000 -17.370001 0.000000
\t\t\t}
\t\t}
\t}
}
MOTION
";

/// A capture with `frames` frames whose values encode (frame, channel).
fn write_capture(path: &Path, frames: usize) {
    let mut bvh = String::from(HIERARCHY);
    bvh.push_str(&format!("Frames: {frames}\nFrame Time: 0.033333\n"));
    for frame in 0..frames {
        let values: Vec<String> = (0..12).map(|channel| format!("{frame}.{channel}")).collect();
        bvh.push_str(&values.join(" "));
        bvh.push('\n');
    }
    fs::write(path, bvh).unwrap();
}

#[test]
fn header_has_one_label_per_declared_channel() {
    let dir = TempDir::new().unwrap();
    let bvh = dir.path().join("walk.bvh");
    write_capture(&bvh, 300);

    run_extract(&[bvh.clone()], &ConvertOptions::default()).unwrap();
    let csv = fs::read_to_string(dir.path().join("walk.csv")).unwrap();
    let header = csv.lines().next().unwrap();

    assert_eq!(header.split(',').count(), 12);
    assert!(header.starts_with("Hips_pos_X,Hips_pos_Y,Hips_pos_Z,Hips_rot_Z"));
    assert!(header.ends_with("LeftLeg_rot_Z,LeftLeg_rot_Y,LeftLeg_rot_X"));
    assert_eq!(load_hierarchy_from_file(&bvh).unwrap().num_channels(), 12);
}

#[test]
fn extracted_frame_count_drops_the_first_250() {
    let dir = TempDir::new().unwrap();
    for (name, frames) in [("long.bvh", 260), ("short.bvh", 40)] {
        write_capture(&dir.path().join(name), frames);
    }
    let inputs = [dir.path().join("long.bvh"), dir.path().join("short.bvh")];
    run_extract(&inputs, &ConvertOptions::default()).unwrap();

    let long = fs::read_to_string(dir.path().join("long.csv")).unwrap();
    assert_eq!(long.lines().count(), 1 + 10);
    assert!(long.lines().nth(1).unwrap().starts_with("250.0,250.1,"));

    let short = fs::read_to_string(dir.path().join("short.csv")).unwrap();
    assert_eq!(short.lines().count(), 1);
}

#[test]
fn extract_then_compose_restores_the_capture() {
    let dir = TempDir::new().unwrap();
    let original = dir.path().join("skeleton.bvh");
    write_capture(&original, 4);

    let options = ConvertOptions::default()
        .with_skip_frames(0)
        .with_output_dir(dir.path().join("out"));
    fs::create_dir(&options.output_dir).unwrap();

    let extracted = run_extract(&[original.clone()], &options).unwrap();
    let csv = extracted.written[0].clone();
    let composed = run_compose(&[csv, original.clone()], &options).unwrap();

    let rebuilt = fs::read_to_string(&composed.written[0]).unwrap();
    let source = fs::read_to_string(&original).unwrap();

    assert!(rebuilt.starts_with(HIERARCHY));
    let motion: Vec<&str> = rebuilt[HIERARCHY.len()..].lines().collect();
    assert_eq!(motion[0], "Frames: 4");
    assert_eq!(motion[1], "Frame Time: 0.00833333");

    let source_frames: Vec<&str> = source.lines().skip_while(|l| !l.starts_with("Frame Time:")).skip(1).collect();
    assert_eq!(&motion[2..], &source_frames[..]);
}

#[test]
fn composed_frame_count_ignores_the_template() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.bvh");
    write_capture(&template, 7);
    let csv = dir.path().join("five.csv");
    let mut rows = String::from("c0,c1,c2,c3,c4,c5\n");
    for _ in 0..5 {
        rows.push_str("0.1,0.2,0.3,0.4,0.5,0.6\n");
    }
    fs::write(&csv, rows).unwrap();

    let options = ConvertOptions::default().with_output_dir(dir.path());
    run_compose(&[csv, template], &options).unwrap();

    let rebuilt = fs::read_to_string(dir.path().join("five.bvh")).unwrap();
    let tail: Vec<&str> = rebuilt.lines().skip_while(|l| *l != "MOTION").skip(1).collect();
    assert_eq!(tail.len(), 7);
    assert_eq!(tail[0], "Frames: 5");
    assert_eq!(tail[1], "Frame Time: 0.00833333");
    assert!(tail[2..].iter().all(|l| *l == "0.1 0.2 0.3 0.4 0.5 0.6"));
}

#[test]
fn binaries_convert_and_report_bad_arguments() {
    let dir = TempDir::new().unwrap();
    let bvh = dir.path().join("take.bvh");
    write_capture(&bvh, 3);
    fs::write(dir.path().join("notes.txt"), "not a capture").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_bvh_to_csv"))
        .current_dir(dir.path())
        .args(["--skip-frames", "0", "notes.txt", "take.bvh"])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.path().join("take.csv").exists());
    assert!(!dir.path().join("notes.csv").exists());

    fs::create_dir(dir.path().join("out")).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_csv_to_bvh"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["-o", "out", "take.csv", "take.bvh"])
        .output()
        .unwrap();
    assert!(output.status.success());
    // successful conversions print nothing
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());
    let rebuilt = fs::read_to_string(dir.path().join("out/take.bvh")).unwrap();
    assert!(rebuilt.contains("Frames: 3\nFrame Time: 0.00833333\n"));

    let output = Command::new(env!("CARGO_BIN_EXE_bvh_to_csv"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--skip-frames", "0", "take.bvh"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));

    let status = Command::new(env!("CARGO_BIN_EXE_bvh_to_csv"))
        .current_dir(dir.path())
        .arg("missing.bvh")
        .status()
        .unwrap();
    assert!(!status.success());
}
