use crate::bone::Bone;
use anyhow::Result;

/// Receives the outcome of a bone extraction.
pub trait BoneSink {
    fn on_bones(&mut self, bones: &[Bone]);
    fn on_error(&mut self, error: &anyhow::Error);
}

/// Writes the outcome to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReport;

impl BoneSink for LogReport {
    fn on_bones(&mut self, bones: &[Bone]) {
        match serde_json::to_string_pretty(bones) {
            Ok(json) => log::info!("Extracted bone data: {}", json),
            Err(e) => log::error!("failed to serialize {} bones: {}", bones.len(), e),
        }
    }

    fn on_error(&mut self, error: &anyhow::Error) {
        log::error!("An error occurred while loading the model: {:#}", error);
    }
}

/// Hands exactly one of the two outcomes to `sink`.
pub fn report<S: BoneSink>(result: Result<Vec<Bone>>, sink: &mut S) {
    match result {
        Ok(bones) => sink.on_bones(&bones),
        Err(e) => sink.on_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bone::Position,
        skeleton::{
            extract_bones,
            Skeleton,
        },
    };
    use log::{
        Level,
        LevelFilter,
        Log,
        Metadata,
        Record,
    };
    use std::{
        sync::{
            Mutex,
            Once,
        },
        thread::ThreadId,
    };

    /// Keeps every record with the thread that emitted it, so parallel tests
    /// only see their own lines.
    struct CaptureLogger {
        records: Mutex<Vec<(ThreadId, Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            let entry = (
                std::thread::current().id(),
                record.level(),
                record.args().to_string(),
            );
            self.records.lock().unwrap().push(entry);
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn capture_records<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        f();
        let id = std::thread::current().id();
        LOGGER
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(thread, _, _)| *thread == id)
            .map(|(_, level, message)| (*level, message.clone()))
            .collect()
    }

    #[derive(Default)]
    struct Recorder {
        bones: Vec<Vec<Bone>>,
        errors: Vec<String>,
    }

    impl BoneSink for Recorder {
        fn on_bones(&mut self, bones: &[Bone]) {
            self.bones.push(bones.to_vec());
        }

        fn on_error(&mut self, error: &anyhow::Error) {
            self.errors.push(format!("{:#}", error));
        }
    }

    #[test]
    fn test_report_missing_model() {
        let name = format!("mimic_report_missing_{}.glb", std::process::id());
        let path = std::env::temp_dir().join(&name);
        let mut recorder = Recorder::default();
        report(extract_bones(&path), &mut recorder);

        assert_eq!(recorder.errors.len(), 1);
        assert!(recorder.errors[0].contains(&name));
        assert!(recorder.bones.is_empty());
    }

    #[test]
    fn test_report_malformed_model() {
        let mut recorder = Recorder::default();
        report(
            Skeleton::from_slice(b"{ \"asset\": ").map(|skeleton| skeleton.bones()),
            &mut recorder,
        );

        assert_eq!(recorder.errors.len(), 1);
        assert!(recorder.bones.is_empty());
    }

    #[test]
    fn test_report_empty_skeleton() {
        let gltf = r#"{ "asset": { "version": "2.0" }, "scenes": [{ "nodes": [] }] }"#;
        let mut recorder = Recorder::default();
        report(
            Skeleton::from_slice(gltf.as_bytes()).map(|skeleton| skeleton.bones()),
            &mut recorder,
        );

        assert!(recorder.errors.is_empty());
        assert_eq!(recorder.bones, vec![Vec::<Bone>::new()]);
    }

    #[test]
    fn test_log_report_bones() {
        let bones = vec![Bone {
            name: "Hips".to_string(),
            position: Position {
                x: 0.0,
                y: 1.5,
                z: -0.25,
            },
        }];
        let records = capture_records(|| report(Ok(bones), &mut LogReport));

        assert_eq!(records.len(), 1);
        let (level, message) = &records[0];
        assert_eq!(*level, Level::Info);
        let json = message.strip_prefix("Extracted bone data: ").unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(json).unwrap(),
            serde_json::json!([
                { "name": "Hips", "position": { "x": 0.0, "y": 1.5, "z": -0.25 } }
            ])
        );
    }

    #[test]
    fn test_log_report_empty() {
        let records = capture_records(|| report(Ok(Vec::new()), &mut LogReport));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Level::Info);
        assert!(records[0].1.ends_with("[]"));
    }

    #[test]
    fn test_log_report_error() {
        let error = anyhow::anyhow!("no such file").context("failed to load model: trial-1.glb");
        let records = capture_records(|| report(Err(error), &mut LogReport));

        assert_eq!(records.len(), 1);
        let (level, message) = &records[0];
        assert_eq!(*level, Level::Error);
        assert!(message.contains("failed to load model: trial-1.glb: no such file"));
    }
}
