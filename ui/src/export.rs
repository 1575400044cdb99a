//! Download the data behind a chart as CSV or as its JSON descriptor.

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::chart::ChartDescriptor;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

#[component]
pub fn ChartExport(chart: ChartDescriptor) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let disabled = chart.is_empty();

    let feedback = match status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "chart-export__status chart-export__status--success",
            message,
        )),
        ExportStatus::Error(err) => Some((
            "chart-export__status chart-export__status--error",
            t!("export-failed", error = err),
        )),
    };

    let csv_handler = {
        let chart = chart.clone();
        move |_| status.set(into_status(export_csv(&chart)))
    };
    let json_handler = {
        let chart = chart.clone();
        move |_| status.set(into_status(export_json(&chart)))
    };

    rsx! {
        div { class: "chart-export",
            span { class: "chart-export__label", {t!("export-heading")} }
            div { class: "chart-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: disabled,
                    onclick: csv_handler,
                    {t!("export-csv")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: disabled,
                    onclick: json_handler,
                    {t!("export-json")}
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn into_status(outcome: Result<String, String>) -> ExportStatus {
    match outcome {
        Ok(message) => {
            info!(%message, "chart exported");
            ExportStatus::Done(message)
        }
        Err(err) => {
            warn!(%err, "chart export failed");
            ExportStatus::Error(err)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    Csv,
    Json,
}

fn export_csv(chart: &ChartDescriptor) -> Result<String, String> {
    let filename = export_filename(chart, "csv");
    let delivery = download_bytes(&filename, "text/csv", build_csv(chart)?.into_bytes())?;
    Ok(delivered_message(ExportKind::Csv, delivery))
}

fn export_json(chart: &ChartDescriptor) -> Result<String, String> {
    let json = serde_json::to_string_pretty(chart).map_err(|err| err.to_string())?;
    let filename = export_filename(chart, "json");
    let delivery = download_bytes(&filename, "application/json", json.into_bytes())?;
    Ok(delivered_message(ExportKind::Json, delivery))
}

/// Status line after a download: the saved path on native, a notice on the web.
fn delivered_message(kind: ExportKind, delivery: Option<String>) -> String {
    match (kind, delivery) {
        (ExportKind::Csv, Some(path)) => t!("export-csv-saved", path = path),
        (ExportKind::Csv, None) => t!("export-csv-started"),
        (ExportKind::Json, Some(path)) => t!("export-json-saved", path = path),
        (ExportKind::Json, None) => t!("export-json-started"),
    }
}

/// `Year,<y axis>` header followed by one row per point, in trace order.
pub fn build_csv(chart: &ChartDescriptor) -> Result<String, String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record([&chart.axes.x, &chart.axes.y])
        .map_err(|err| err.to_string())?;
    for point in &chart.trace.points {
        wtr.write_record([point.year.to_string(), point.value.to_string()])
            .map_err(|err| err.to_string())?;
    }

    let bytes = wtr.into_inner().map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

/// Slug of the chart title plus a UTC timestamp, e.g.
/// `employment-in-selangor-over-time-20261015_093000.csv`.
pub fn export_filename(chart: &ChartDescriptor, extension: &str) -> String {
    let mut slug = String::with_capacity(chart.title.len());
    for ch in chart.title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "chart" } else { slug };
    format!("{slug}-{}.{extension}", timestamp_slug())
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

/// Browser download on the web (returns `None`); a file under the platform data
/// dir on native builds (returns its path).
fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        fs::write(&path, bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("my", "Labourscope", "Labourscope")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::{build, AxisLabels, TitleTemplate};
    use crate::core::dataset::{Dataset, Row};
    use crate::core::series::{select, Series};

    fn chart(key: Option<&str>) -> ChartDescriptor {
        let data = Dataset::new(
            "Employed",
            vec![
                Row::new("Selangor", 2019, 3_000_000.0),
                Row::new("Selangor", 2020, 3_100_000.5),
            ],
        );
        build(
            &select(&data, key),
            TitleTemplate::new("Employment in {key} Over Time"),
            &AxisLabels::for_metric("Employment"),
        )
    }

    #[test]
    fn csv_lists_points_in_trace_order() {
        assert_eq!(
            build_csv(&chart(Some("Selangor"))).unwrap(),
            "Year,Employment\n2019,3000000\n2020,3100000.5\n"
        );
    }

    #[test]
    fn csv_quotes_awkward_headers() {
        let mut chart = chart(None);
        chart.axes.y = "Rate, \"%\"".to_string();
        assert_eq!(build_csv(&chart).unwrap(), "Year,\"Rate, \"\"%\"\"\"\n");
    }

    #[test]
    fn filename_is_a_slug_of_the_title() {
        let name = export_filename(&chart(Some("W.P. Kuala Lumpur")), "csv");
        assert!(name.starts_with("employment-in-w-p-kuala-lumpur-over-time-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn empty_chart_still_has_a_header() {
        let empty = build(
            &Series::empty(),
            TitleTemplate::new("Employment in {key} Over Time"),
            &AxisLabels::for_metric("Employment"),
        );
        assert_eq!(build_csv(&empty).unwrap(), "Year,Employment\n");
    }

    #[test]
    fn saved_exports_name_the_path() {
        crate::i18n::init();
        let csv = delivered_message(ExportKind::Csv, Some("/tmp/employment.csv".into()));
        let json = delivered_message(ExportKind::Json, Some("/tmp/employment.json".into()));
        assert!(csv.contains("/tmp/employment.csv"));
        assert!(json.contains("/tmp/employment.json"));
    }

    #[test]
    fn browser_downloads_report_the_format() {
        crate::i18n::init();
        assert!(delivered_message(ExportKind::Csv, None).contains("CSV"));
        assert!(delivered_message(ExportKind::Json, None).contains("JSON"));
    }
}
