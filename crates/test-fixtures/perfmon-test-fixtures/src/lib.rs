//! Deterministic collaborators and recorded metric traces for perfmon tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use perfmon_stats_core::{MetricKind, MetricSource, TextSink};
use perfmon_uniform_core::ShaderUniformSink;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    traces: HashMap<String, String>,
    oscillators: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// One recorded reading of all three host counters.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct TraceSample {
    pub fps: f64,
    pub draw_time: f64,
    pub memory: f64,
}

/// A recorded sequence of per-sample readings.
#[derive(Clone, Debug, Deserialize)]
pub struct MetricTrace {
    #[serde(default)]
    pub description: String,
    pub samples: Vec<TraceSample>,
}

pub mod traces {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.traces.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.traces, "trace", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<MetricTrace> {
        let rel = lookup(&MANIFEST.traces, "trace", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.traces, "trace", name)?;
        Ok(resolve_path(rel))
    }
}

pub mod oscillators {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.oscillators.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.oscillators, "oscillator", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.oscillators, "oscillator", name)?;
        super::load_json(rel)
    }
}

/// Metric source replaying fixed per-kind sequences. Each kind advances
/// independently on every read; the last value repeats once a sequence is
/// exhausted, and an empty sequence reads as zero.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    fps: Vec<f64>,
    draw_time: Vec<f64>,
    memory: Vec<f64>,
    cursors: [usize; 3],
}

impl ScriptedSource {
    pub fn new(fps: Vec<f64>, draw_time: Vec<f64>, memory: Vec<f64>) -> Self {
        Self {
            fps,
            draw_time,
            memory,
            cursors: [0; 3],
        }
    }

    pub fn constant(fps: f64, draw_time: f64, memory: f64) -> Self {
        Self::new(vec![fps], vec![draw_time], vec![memory])
    }

    pub fn from_trace(trace: &MetricTrace) -> Self {
        Self::new(
            trace.samples.iter().map(|s| s.fps).collect(),
            trace.samples.iter().map(|s| s.draw_time).collect(),
            trace.samples.iter().map(|s| s.memory).collect(),
        )
    }

    /// Number of reads served for `kind`.
    pub fn reads(&self, kind: MetricKind) -> usize {
        self.cursors[slot(kind)]
    }

    fn series(&self, kind: MetricKind) -> &[f64] {
        match kind {
            MetricKind::Fps => &self.fps,
            MetricKind::DrawTimeSeconds => &self.draw_time,
            MetricKind::MemoryBytes => &self.memory,
        }
    }
}

fn slot(kind: MetricKind) -> usize {
    match kind {
        MetricKind::Fps => 0,
        MetricKind::DrawTimeSeconds => 1,
        MetricKind::MemoryBytes => 2,
    }
}

impl MetricSource for ScriptedSource {
    fn get_metric(&mut self, kind: MetricKind) -> f64 {
        let idx = self.cursors[slot(kind)];
        let series = self.series(kind);
        let value = series
            .get(idx)
            .or_else(|| series.last())
            .copied()
            .unwrap_or(0.0);
        self.cursors[slot(kind)] += 1;
        value
    }
}

/// Text sink that keeps every string it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingTextSink {
    pub history: Vec<String>,
}

impl RecordingTextSink {
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(|s| s.as_str())
    }
}

impl TextSink for RecordingTextSink {
    fn set_text(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

/// Uniform sink that keeps every write in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingUniformSink {
    pub writes: Vec<(String, f32)>,
}

impl RecordingUniformSink {
    pub fn values(&self, name: &str) -> Vec<f32> {
        self.writes
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl ShaderUniformSink for RecordingUniformSink {
    fn set_float(&mut self, name: &str, value: f32) {
        self.writes.push((name.to_string(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_traces_load() {
        for key in traces::keys() {
            let trace = traces::load(&key).unwrap();
            assert!(!trace.samples.is_empty(), "trace {key} is empty");
        }
    }

    #[test]
    fn trace_path_and_json_agree_with_load() {
        let path = traces::path("degrading").unwrap();
        assert!(path.is_file(), "{}", path.display());
        let raw = traces::json("degrading").unwrap();
        let parsed: MetricTrace = serde_json::from_str(&raw).unwrap();
        let loaded = traces::load("degrading").unwrap();
        assert_eq!(parsed.samples, loaded.samples);
        assert_eq!(loaded.samples.len(), 100);
    }

    #[test]
    fn scripted_source_repeats_last() {
        let mut src = ScriptedSource::new(vec![1.0, 2.0], vec![], vec![7.0]);
        assert_eq!(src.get_metric(MetricKind::Fps), 1.0);
        assert_eq!(src.get_metric(MetricKind::Fps), 2.0);
        assert_eq!(src.get_metric(MetricKind::Fps), 2.0);
        assert_eq!(src.get_metric(MetricKind::DrawTimeSeconds), 0.0);
        assert_eq!(src.get_metric(MetricKind::MemoryBytes), 7.0);
        assert_eq!(src.reads(MetricKind::Fps), 3);
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        assert!(traces::load("does-not-exist").is_err());
    }
}
