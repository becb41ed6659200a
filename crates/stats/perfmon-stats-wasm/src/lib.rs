use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use perfmon_stats_core::{FrameStatsSampler, MetricKind, MetricSource, Report, SamplerConfig};

#[wasm_bindgen]
pub struct PerfMonitor {
    core: FrameStatsSampler,
    last_report: Option<Report>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Calls `source(kind)` with `"fps" | "draw_time" | "memory"`. Non-numeric
/// results pass through as NaN; the first thrown exception is kept so the
/// tick can report it.
struct JsSource {
    f: Function,
    error: Option<JsValue>,
}

impl MetricSource for JsSource {
    fn get_metric(&mut self, kind: MetricKind) -> f64 {
        let arg = JsValue::from_str(kind.as_str());
        match self.f.call1(&JsValue::UNDEFINED, &arg) {
            Ok(val) => val.as_f64().unwrap_or(f64::NAN),
            Err(err) => {
                self.error.get_or_insert(err);
                f64::NAN
            }
        }
    }
}

#[wasm_bindgen]
impl PerfMonitor {
    /// Create a sampler. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new PerfMonitor({ sample_interval: 10, report_interval: 500 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PerfMonitor, JsError> {
        console_error_panic_hook::set_once();

        let cfg: SamplerConfig = if jsvalue_is_undefined_or_null(&config) {
            SamplerConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = FrameStatsSampler::new(cfg).map_err(|e| JsError::new(&e.to_string()))?;

        Ok(PerfMonitor {
            core,
            last_report: None,
        })
    }

    /// Advance one frame. `source(kind)` is called only on sample ticks.
    /// Returns the report object on report ticks, otherwise `undefined`.
    /// If the source threw, the tick still completes (the failed reads fold
    /// as NaN and any report is kept for `report_text`) and the exception is
    /// returned as an error.
    pub fn tick(&mut self, source: Function) -> Result<JsValue, JsError> {
        let mut src = JsSource {
            f: source,
            error: None,
        };
        let report = self.core.on_frame_tick(&mut src);
        let out = report.map(|report| {
            let value = swb::to_value(&report).map_err(|e| JsError::new(&format!("{e}")));
            self.last_report = Some(report);
            value
        });
        if let Some(err) = src.error {
            return Err(JsError::new(&format!(
                "metric source threw: {}",
                err.as_string().unwrap_or_else(|| format!("{err:?}"))
            )));
        }
        match out {
            Some(value) => value,
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Overlay text of the most recent report, if any.
    #[wasm_bindgen(js_name = report_text)]
    pub fn report_text(&self) -> Option<String> {
        self.last_report.as_ref().map(Report::to_text)
    }

    /// Current window as a report object, without resetting it.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.report()).map_err(|e| JsError::new(&format!("{e}")))
    }

    #[wasm_bindgen(js_name = frame_count)]
    pub fn frame_count(&self) -> f64 {
        self.core.frame_count() as f64
    }

    #[wasm_bindgen(js_name = sample_count)]
    pub fn sample_count(&self) -> f64 {
        self.core.sample_count() as f64
    }
}

#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
