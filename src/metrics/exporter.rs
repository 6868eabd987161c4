use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::{
    BlockChainMetricsSnapshot, RingBufferMetricsSnapshot, SqrtArrayMetricsSnapshot,
};
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for container metrics snapshots.
///
/// Writes the Prometheus text exposition format, so the output can be served
/// on a scrape endpoint or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .expect("metrics exporter writer poisoned");
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .expect("metrics exporter writer poisoned");
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }

    fn write_core(&self, insert_calls: u64, remove_calls: u64, clear_calls: u64) {
        self.write_counter(&self.metric_name("insert_calls_total"), insert_calls);
        self.write_counter(&self.metric_name("remove_calls_total"), remove_calls);
        self.write_counter(&self.metric_name("clear_calls_total"), clear_calls);
    }
}

impl<W: Write + Send + Sync> MetricsExporter<RingBufferMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &RingBufferMetricsSnapshot) {
        self.write_core(
            snapshot.insert_calls,
            snapshot.remove_calls,
            snapshot.clear_calls,
        );
        self.write_counter(&self.metric_name("grow_events_total"), snapshot.grow_events);
        self.write_counter(
            &self.metric_name("shrink_events_total"),
            snapshot.shrink_events,
        );
        self.write_counter(&self.metric_name("overwrites_total"), snapshot.overwrites);
        self.write_counter(&self.metric_name("rejects_total"), snapshot.rejects);
        self.write_counter(&self.metric_name("shift_steps_total"), snapshot.shift_steps);
        self.write_counter(
            &self.metric_name("linearize_calls_total"),
            snapshot.linearize_calls,
        );
        self.write_counter(
            &self.metric_name("resize_calls_total"),
            snapshot.resize_calls,
        );
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}

impl<W: Write + Send + Sync> MetricsExporter<SqrtArrayMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &SqrtArrayMetricsSnapshot) {
        self.write_core(
            snapshot.insert_calls,
            snapshot.remove_calls,
            snapshot.clear_calls,
        );
        self.write_counter(&self.metric_name("block_grows_total"), snapshot.block_grows);
        self.write_counter(
            &self.metric_name("block_shrinks_total"),
            snapshot.block_shrinks,
        );
        self.write_counter(
            &self.metric_name("ripple_steps_total"),
            snapshot.ripple_steps,
        );
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
        self.write_gauge(
            &self.metric_name("block_count"),
            snapshot.block_count as u64,
        );
    }
}

impl<W: Write + Send + Sync> MetricsExporter<BlockChainMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &BlockChainMetricsSnapshot) {
        self.write_core(
            snapshot.insert_calls,
            snapshot.remove_calls,
            snapshot.clear_calls,
        );
        self.write_counter(
            &self.metric_name("push_back_fast_total"),
            snapshot.push_back_fast,
        );
        self.write_counter(
            &self.metric_name("push_front_fast_total"),
            snapshot.push_front_fast,
        );
        self.write_counter(&self.metric_name("shifts_total"), snapshot.shifts);
        self.write_counter(&self.metric_name("spreads_total"), snapshot.spreads);
        self.write_counter(&self.metric_name("gathers_total"), snapshot.gathers);
        self.write_counter(&self.metric_name("end_of_list_total"), snapshot.end_of_list);
        self.write_counter(
            &self.metric_name("nodes_allocated_total"),
            snapshot.nodes_allocated,
        );
        self.write_counter(&self.metric_name("nodes_freed_total"), snapshot.nodes_freed);
        self.write_counter(
            &self.metric_name("element_moves_total"),
            snapshot.element_moves,
        );
        self.write_counter(
            &self.metric_name("locate_calls_total"),
            snapshot.locate_calls,
        );
        self.write_counter(
            &self.metric_name("locate_steps_total"),
            snapshot.locate_steps,
        );
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("node_count"), snapshot.node_count as u64);
        self.write_gauge(&self.metric_name("block_size"), snapshot.block_size as u64);
    }
}
