use folio_protocol::{Container, Figure, GalleryCommand, Orientation};

use super::rows::partition_rows;
use super::strategy::LoadStrategy;
use crate::model::{SeriesData, usable_filename};

/// Directory the payload's filenames are relative to.
pub const DEFAULT_IMAGE_BASE: &str = "images/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryOptions {
    pub image_base: String,
    pub strategy: LoadStrategy,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            strategy: LoadStrategy::Standard,
        }
    }
}

impl GalleryOptions {
    pub fn with_strategy(mut self, strategy: LoadStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Render a series into gallery commands.
///
/// Output order: clear both containers, the filmstrip figures, then each
/// grid row wrapped in `BeginRow`/`EndRow`. Row sizes come from
/// [`partition_rows`] over the raw `vertical` list, so a blank entry still
/// takes its slot in a row; it just produces no figure. Figure indices
/// count created figures only, starting at 1.
pub fn render_gallery(series: &SeriesData, options: &GalleryOptions) -> Vec<GalleryCommand> {
    let mut commands = Vec::with_capacity(series.horizontal.len() + series.vertical.len() * 2 + 2);
    commands.push(GalleryCommand::Clear {
        target: Container::Track,
    });
    commands.push(GalleryCommand::Clear {
        target: Container::Grid,
    });

    let mut builder = FigureBuilder {
        options,
        created: 0,
    };

    for name in series.horizontal.iter().filter_map(|n| usable_filename(n.as_deref())) {
        let figure = builder.build(name, Orientation::Horizontal);
        commands.push(GalleryCommand::Figure {
            target: Container::Track,
            figure,
        });
    }

    let mut start = 0;
    let mut row = 0;
    for size in partition_rows(series.vertical.len(), &series.rows) {
        let names: Vec<&str> = series.vertical[start..start + size]
            .iter()
            .filter_map(|n| usable_filename(n.as_deref()))
            .collect();
        start += size;
        if names.is_empty() {
            continue;
        }

        commands.push(GalleryCommand::BeginRow {
            row,
            len: names.len(),
        });
        for name in names {
            let figure = builder.build(name, Orientation::Vertical);
            commands.push(GalleryCommand::Figure {
                target: Container::Grid,
                figure,
            });
        }
        commands.push(GalleryCommand::EndRow);
        row += 1;
    }

    commands
}

struct FigureBuilder<'a> {
    options: &'a GalleryOptions,
    created: usize,
}

impl FigureBuilder<'_> {
    fn build(&mut self, name: &str, orientation: Orientation) -> Figure {
        let hints = self.options.strategy.hints(self.created, orientation);
        self.created += 1;
        let index = self.created;
        Figure {
            index,
            src: join_src(&self.options.image_base, name),
            alt: alt_text(index),
            orientation,
            loading: hints.loading,
            decoding: hints.decoding,
            fetch_priority: hints.fetch_priority,
        }
    }
}

pub fn alt_text(index: usize) -> String {
    format!("Work {index:02}")
}

fn join_src(base: &str, name: &str) -> String {
    if base.is_empty() {
        return name.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), name.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use folio_protocol::{Decoding, FetchPriority, Loading};
    use pretty_assertions::assert_eq;

    use super::*;

    fn series(horizontal: &[&str], rows: &[i64], vertical: &[&str]) -> SeriesData {
        SeriesData::new(
            horizontal.iter().map(|s| s.to_string()).collect(),
            rows.to_vec(),
            vertical.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn row_lengths(commands: &[GalleryCommand]) -> Vec<usize> {
        commands
            .iter()
            .filter_map(|c| match c {
                GalleryCommand::BeginRow { len, .. } => Some(*len),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn renders_filmstrip_then_rows() {
        let cmds = render_gallery(
            &series(&["hor/a.JPG"], &[2], &["vert/b.JPG", "vert/c.JPG", "vert/d.JPG"]),
            &GalleryOptions::default(),
        );
        let first_figure = Figure {
            index: 1,
            src: "images/hor/a.JPG".into(),
            alt: "Work 01".into(),
            orientation: Orientation::Horizontal,
            loading: Loading::Eager,
            decoding: Decoding::Auto,
            fetch_priority: FetchPriority::Auto,
        };
        assert_eq!(
            &cmds[..3],
            &[
                GalleryCommand::Clear {
                    target: Container::Track
                },
                GalleryCommand::Clear {
                    target: Container::Grid
                },
                GalleryCommand::Figure {
                    target: Container::Track,
                    figure: first_figure,
                },
            ]
        );
        assert_eq!(row_lengths(&cmds), vec![2, 1]);
        assert_eq!(cmds.last(), Some(&GalleryCommand::EndRow));
    }

    #[test]
    fn grid_figures_are_lazy_by_default() {
        let cmds = render_gallery(&series(&[], &[], &["v1"]), &GalleryOptions::default());
        let figure = cmds.iter().find_map(GalleryCommand::figure).unwrap();
        assert_eq!(figure.loading, Loading::Lazy);
        assert_eq!(figure.orientation, Orientation::Vertical);
    }

    #[test]
    fn alt_indices_are_contiguous_across_both_lists() {
        let cmds = render_gallery(
            &series(&["h1", "h2"], &[1], &["v1", "v2", "v3", "v4"]),
            &GalleryOptions::default(),
        );
        let alts: Vec<_> = cmds
            .iter()
            .filter_map(GalleryCommand::figure)
            .map(|f| f.alt.as_str())
            .collect();
        assert_eq!(
            alts,
            vec!["Work 01", "Work 02", "Work 03", "Work 04", "Work 05", "Work 06"]
        );
    }

    #[test]
    fn blank_entries_are_skipped_without_consuming_an_index() {
        let data = SeriesData {
            horizontal: vec![Some("h1".into()), None, Some(String::new()), Some("h2".into())],
            rows: vec![2],
            vertical: vec![None, Some("v1".into()), Some("v2".into())],
        };
        let cmds = render_gallery(&data, &GalleryOptions::default());
        let indices: Vec<_> = cmds
            .iter()
            .filter_map(GalleryCommand::figure)
            .map(|f| f.index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        // [None, v1] fills the first row, v2 goes to a leftover row.
        assert_eq!(row_lengths(&cmds), vec![1, 1]);
    }

    #[test]
    fn whitespace_names_are_rendered() {
        let data: SeriesData = serde_json::from_str(r#"{"horizontal": [" "]}"#).unwrap();
        let cmds = render_gallery(&data, &GalleryOptions::default());
        let srcs: Vec<_> = cmds
            .iter()
            .filter_map(GalleryCommand::figure)
            .map(|f| f.src.as_str())
            .collect();
        assert_eq!(srcs, vec!["images/ "]);
    }

    #[test]
    fn falsy_payload_entries_are_skipped() {
        let data: SeriesData = serde_json::from_str(
            r#"{"horizontal": ["h1", false, 0, "h2"], "rows": [2], "vertical": [null, "v1", ""]}"#,
        )
        .unwrap();
        let cmds = render_gallery(&data, &GalleryOptions::default());
        let alts: Vec<_> = cmds
            .iter()
            .filter_map(GalleryCommand::figure)
            .map(|f| f.alt.as_str())
            .collect();
        assert_eq!(alts, vec!["Work 01", "Work 02", "Work 03"]);
        // The leftover row holds only "" and is dropped.
        assert_eq!(row_lengths(&cmds), vec![1]);
    }

    #[test]
    fn fully_blank_row_is_dropped() {
        let data = SeriesData {
            horizontal: vec![],
            rows: vec![1, 1],
            vertical: vec![None, Some("v".into())],
        };
        let cmds = render_gallery(&data, &GalleryOptions::default());
        assert_eq!(row_lengths(&cmds), vec![1]);
        assert!(cmds.contains(&GalleryCommand::BeginRow { row: 0, len: 1 }));
    }

    #[test]
    fn two_digit_padding_grows_past_99() {
        assert_eq!(alt_text(7), "Work 07");
        assert_eq!(alt_text(123), "Work 123");
    }

    #[test]
    fn image_base_is_joined_with_one_slash() {
        assert_eq!(join_src("images/", "hor/a.JPG"), "images/hor/a.JPG");
        assert_eq!(join_src("images", "/hor/a.JPG"), "images/hor/a.JPG");
        assert_eq!(join_src("", "a.JPG"), "a.JPG");
    }

    #[test]
    fn series_switch_strategy_spans_filmstrip_and_grid() {
        let horizontal: Vec<String> = (0..10).map(|i| format!("h{i}")).collect();
        let vertical: Vec<String> = (0..5).map(|i| format!("v{i}")).collect();
        let data = SeriesData::new(horizontal, vec![], vertical);
        let options = GalleryOptions::default().with_strategy(LoadStrategy::SERIES_SWITCH);
        let figures: Vec<_> = render_gallery(&data, &options)
            .iter()
            .filter_map(GalleryCommand::figure)
            .cloned()
            .collect();

        let eager = figures.iter().filter(|f| f.loading == Loading::Eager).count();
        let high = figures
            .iter()
            .filter(|f| f.fetch_priority == FetchPriority::High)
            .count();
        assert_eq!(eager, 12);
        assert_eq!(high, 4);
        // Figures 11 and 12 are grid images but still eager.
        assert_eq!(figures[11].orientation, Orientation::Vertical);
        assert_eq!(figures[11].loading, Loading::Eager);
        assert_eq!(figures[12].loading, Loading::Lazy);
    }
}
