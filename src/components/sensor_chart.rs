// ============================================================================
// SENSOR CHART - Serie de temperatura en SVG puro
// ============================================================================
// Tres series (interna, set point, ambiente) con líneas de umbral. El
// escalado es aritmética pura para poder testearlo fuera del navegador.
// ============================================================================

use yew::prelude::*;

use crate::models::TemperatureReading;
use crate::utils::format_clock_time;

const VIEW_WIDTH: f64 = 720.0;
const VIEW_HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 32.0;

fn plot_right() -> f64 {
    VIEW_WIDTH - MARGIN_RIGHT
}

fn plot_bottom() -> f64 {
    VIEW_HEIGHT - MARGIN_BOTTOM
}

/// Temperature extent of the plot: data plus thresholds, padded by one
/// degree so lines never touch the frame.
fn chart_domain(data: &[TemperatureReading], thresholds: Option<(f64, f64)>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for reading in data {
        for value in [reading.internal, reading.set_point, reading.ambient] {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if let Some((lo, hi)) = thresholds {
        min = min.min(lo);
        max = max.max(hi);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    (min - 1.0, max + 1.0)
}

fn scale_linear(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if (d1 - d0).abs() < f64::EPSILON {
        return (r0 + r1) / 2.0;
    }
    r0 + (value - d0) / (d1 - d0) * (r1 - r0)
}

fn x_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return MARGIN_LEFT;
    }
    scale_linear(
        index as f64,
        (0.0, (count - 1) as f64),
        (MARGIN_LEFT, plot_right()),
    )
}

fn y_position(value: f64, domain: (f64, f64)) -> f64 {
    // SVG y grows downward
    scale_linear(value, domain, (plot_bottom(), MARGIN_TOP))
}

/// "x,y x,y …" polyline points for one series.
fn series_points(
    data: &[TemperatureReading],
    domain: (f64, f64),
    value: fn(&TemperatureReading) -> f64,
) -> String {
    data.iter()
        .enumerate()
        .map(|(i, reading)| {
            format!(
                "{:.1},{:.1}",
                x_position(i, data.len()),
                y_position(value(reading), domain)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct SensorChartProps {
    pub data: Vec<TemperatureReading>,
    #[prop_or_default]
    pub thresholds: Option<(f64, f64)>,
}

#[function_component(SensorChart)]
pub fn sensor_chart(props: &SensorChartProps) -> Html {
    if props.data.is_empty() {
        return html! { <div class="chart-empty">{ "No sensor data" }</div> };
    }

    let domain = chart_domain(&props.data, props.thresholds);
    let internal = series_points(&props.data, domain, |r| r.internal);
    let set_point = series_points(&props.data, domain, |r| r.set_point);
    let ambient = series_points(&props.data, domain, |r| r.ambient);

    let threshold_lines = props.thresholds.map(|(lo, hi)| {
        let y_lo = y_position(lo, domain);
        let y_hi = y_position(hi, domain);
        html! {
            <g class="thresholds">
                <line x1={MARGIN_LEFT.to_string()} x2={plot_right().to_string()}
                      y1={format!("{:.1}", y_hi)} y2={format!("{:.1}", y_hi)}
                      class="threshold-line" stroke-dasharray="5 5" />
                <text x={(plot_right() - 28.0).to_string()} y={format!("{:.1}", y_hi - 4.0)}
                      class="threshold-label">{ "Max" }</text>
                <line x1={MARGIN_LEFT.to_string()} x2={plot_right().to_string()}
                      y1={format!("{:.1}", y_lo)} y2={format!("{:.1}", y_lo)}
                      class="threshold-line" stroke-dasharray="5 5" />
                <text x={(plot_right() - 26.0).to_string()} y={format!("{:.1}", y_lo - 4.0)}
                      class="threshold-label">{ "Min" }</text>
            </g>
        }
    });

    // Axis ticks: first, middle and last timestamps; three temperature
    // gridline labels.
    let count = props.data.len();
    let tick_indexes = [0, count / 2, count - 1];
    let x_ticks = tick_indexes
        .iter()
        .map(|&i| {
            let x = x_position(i, count);
            let label = format_clock_time(props.data[i].timestamp);
            html! {
                <text x={format!("{:.1}", x)} y={(VIEW_HEIGHT - 10.0).to_string()}
                      class="axis-label" text-anchor="middle">{ label }</text>
            }
        })
        .collect::<Html>();

    let (d_min, d_max) = domain;
    let y_ticks = [d_min, (d_min + d_max) / 2.0, d_max]
        .iter()
        .map(|&value| {
            let y = y_position(value, domain);
            html! {
                <g>
                    <line x1={MARGIN_LEFT.to_string()} x2={plot_right().to_string()}
                          y1={format!("{:.1}", y)} y2={format!("{:.1}", y)}
                          class="gridline" />
                    <text x={(MARGIN_LEFT - 8.0).to_string()} y={format!("{:.1}", y + 4.0)}
                          class="axis-label" text-anchor="end">
                        { format!("{:.1}°", value) }
                    </text>
                </g>
            }
        })
        .collect::<Html>();

    html! {
        <div class="sensor-chart">
            <svg viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
                 preserveAspectRatio="xMidYMid meet" role="img">
                { y_ticks }
                { for threshold_lines }
                <polyline points={ambient} class="series-ambient" fill="none" />
                <polyline points={set_point} class="series-setpoint" fill="none"
                          stroke-dasharray="5 5" />
                <polyline points={internal} class="series-internal" fill="none" />
                { x_ticks }
            </svg>
            <div class="chart-legend">
                <span class="legend-internal">{ "Internal Temp" }</span>
                <span class="legend-setpoint">{ "Set Point" }</span>
                <span class="legend-ambient">{ "Ambient Temp" }</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(internal: f64, set_point: f64, ambient: f64) -> TemperatureReading {
        TemperatureReading {
            timestamp: 0.0,
            internal,
            set_point,
            ambient,
        }
    }

    #[test]
    fn domain_covers_data_and_thresholds_with_padding() {
        let data = vec![reading(5.2, 5.0, 24.0), reading(4.6, 5.0, 26.0)];
        let (min, max) = chart_domain(&data, Some((2.0, 8.0)));
        assert_eq!(min, 1.0);
        assert_eq!(max, 27.0);
    }

    #[test]
    fn empty_domain_falls_back() {
        assert_eq!(chart_domain(&[], None), (0.0, 1.0));
    }

    #[test]
    fn scale_maps_endpoints() {
        assert_eq!(scale_linear(0.0, (0.0, 10.0), (100.0, 200.0)), 100.0);
        assert_eq!(scale_linear(10.0, (0.0, 10.0), (100.0, 200.0)), 200.0);
        assert_eq!(scale_linear(5.0, (0.0, 10.0), (100.0, 200.0)), 150.0);
    }

    #[test]
    fn degenerate_domain_centers() {
        assert_eq!(scale_linear(7.0, (7.0, 7.0), (0.0, 100.0)), 50.0);
    }

    #[test]
    fn polyline_has_one_point_per_reading() {
        let data = vec![
            reading(5.0, 5.0, 24.0),
            reading(5.1, 5.0, 24.5),
            reading(4.9, 5.0, 23.5),
        ];
        let domain = chart_domain(&data, None);
        let points = series_points(&data, domain, |r| r.internal);
        assert_eq!(points.split(' ').count(), 3);
        assert!(points.split(' ').all(|pair| pair.contains(',')));
    }
}
