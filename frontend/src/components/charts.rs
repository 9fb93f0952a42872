use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::analytics::{BudgetSlice, CategoryCount, MonthlyTrend};
use shared::config::CHART_COLORS;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CANVAS_WIDTH: u32 = 560;
const CANVAS_HEIGHT: u32 = 320;
const PRIMARY: RGBColor = RGBColor(102, 126, 234);

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Budget per trip, drawn as a pie
    Budget(Vec<BudgetSlice>),
    /// Trips per month, drawn as a line
    Trend(Vec<MonthlyTrend>),
    /// Activities per companion type, drawn as bars
    Categories(Vec<CategoryCount>),
}

impl ChartData {
    fn is_empty(&self) -> bool {
        match self {
            ChartData::Budget(slices) => slices.is_empty(),
            ChartData::Trend(points) => points.is_empty(),
            ChartData::Categories(counts) => counts.is_empty(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub title: AttrValue,
    pub data: ChartData,
}

/// A plotters chart rendered into its own canvas
pub struct Chart {
    canvas_ref: NodeRef,
}

impl Component for Chart {
    type Message = ();
    type Properties = ChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // The canvas only exists after the view has been committed
        self.draw(&ctx.props().data);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{props.title.clone()}</h3>
                {if props.data.is_empty() {
                    html! { <div class="chart-empty"><p>{"No data to chart yet"}</p></div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="chart-canvas"
                            width={CANVAS_WIDTH.to_string()}
                            height={CANVAS_HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

fn color(index: usize) -> RGBColor {
    let (r, g, b) = CHART_COLORS[index % CHART_COLORS.len()];
    RGBColor(r, g, b)
}

impl Chart {
    fn draw(&self, data: &ChartData) {
        if data.is_empty() {
            return;
        }
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);
        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            return;
        };
        let root = backend.into_drawing_area();

        let result = match data {
            ChartData::Budget(slices) => draw_pie(&root, slices),
            ChartData::Trend(points) => draw_line(&root, points),
            ChartData::Categories(counts) => draw_bars(&root, counts),
        };
        if let Err(e) = result {
            Logger::error_with_component("charts", &format!("Failed to draw chart: {}", e));
        }
    }
}

type ChartResult = Result<(), Box<dyn std::error::Error>>;

fn draw_pie(root: &DrawingArea<CanvasBackend, plotters::coord::Shift>, slices: &[BudgetSlice]) -> ChartResult {
    root.fill(&WHITE)?;
    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = (width.min(height) as f64) * 0.35;
    let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let colors: Vec<RGBColor> = (0..slices.len()).map(color).collect();
    let labels: Vec<String> = slices
        .iter()
        .map(|s| format!("{} (${:.0})", s.name, s.value))
        .collect();
    let pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    root.draw(&pie)?;
    root.present()?;
    Ok(())
}

fn draw_line(root: &DrawingArea<CanvasBackend, plotters::coord::Shift>, points: &[MonthlyTrend]) -> ChartResult {
    root.fill(&WHITE)?;
    let max_trips = points.iter().map(|p| p.trips).max().unwrap_or(0) as i32 + 1;
    let last = (points.len() as i32 - 1).max(1);

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..last, 0..max_trips)?;

    chart
        .configure_mesh()
        .x_labels(points.len().max(2))
        .x_label_formatter(&|x| {
            points
                .get(*x as usize)
                .map(|p| p.month.clone())
                .unwrap_or_default()
        })
        .y_desc("Trips")
        .label_style(("sans-serif", 12, &PRIMARY))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()?;

    let series: Vec<(i32, i32)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as i32, p.trips as i32))
        .collect();
    chart.draw_series(LineSeries::new(series.clone(), PRIMARY.stroke_width(3)))?;
    chart.draw_series(series.into_iter().map(|point| Circle::new(point, 4, PRIMARY.filled())))?;
    root.present()?;
    Ok(())
}

fn draw_bars(root: &DrawingArea<CanvasBackend, plotters::coord::Shift>, counts: &[CategoryCount]) -> ChartResult {
    root.fill(&WHITE)?;
    let max_count = counts.iter().map(|c| c.activities).max().unwrap_or(0) + 1;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d((0..counts.len() as i32).into_segmented(), 0u32..max_count)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => counts
                .get(*index as usize)
                .map(|c| c.category.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc("Activities")
        .label_style(("sans-serif", 12, &PRIMARY))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color(1).filled())
            .margin(12)
            .data(counts.iter().enumerate().map(|(i, c)| (i as i32, c.activities))),
    )?;
    root.present()?;
    Ok(())
}
