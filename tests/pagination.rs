mod common;

use common::FixedMeasurer;
use text_pages::{Layout, LineMeasurer, Page, Spacing, paginate, paginate_article, wrap_article};

const SPACING: Spacing = Spacing {
    line: 4,
    paragraph: 25,
};

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn page_height(page: &Page, measurer: &impl LineMeasurer) -> u32 {
    page.lines
        .iter()
        .map(|l| measurer.measure(l).height + SPACING.for_line(l))
        .sum()
}

#[test]
fn empty_input_has_no_pages() {
    let pages = paginate(Vec::new(), &FixedMeasurer::new(10), SPACING, 100, 10);
    assert!(pages.is_empty());
}

#[test]
fn generous_budget_keeps_one_page() {
    let measurer = FixedMeasurer::new(36);
    let wrapped = wrap_article("Hello world.\n\nSecond paragraph.", 70);
    let pages = paginate(wrapped, &measurer, SPACING, 1200, 20);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].lines, vec!["Hello world.", "", "Second paragraph."]);
    assert_eq!(pages[0].height, (36 + 4) + 25 + (36 + 4));
}

#[test]
fn splits_exactly_at_budget_boundary() {
    // Each line needs 10 + 4 = 14px; budget is 100 - 2*10 = 80px, so five
    // lines (70px) fit and the sixth (84px) starts page two.
    let input = lines(&["l0", "l1", "l2", "l3", "l4", "l5", "l6", "l7"]);
    let pages = paginate(input.clone(), &FixedMeasurer::new(10), SPACING, 100, 10);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines, input[..5]);
    assert_eq!(pages[1].lines, input[5..]);
    assert_eq!(pages[0].height, 70);
    assert_eq!(pages[1].height, 42);
}

#[test]
fn line_that_exactly_fills_budget_stays() {
    // 4 lines of 16 + 4 = 80px fill an 80px budget exactly.
    let input = lines(&["a", "b", "c", "d", "e"]);
    let pages = paginate(input, &FixedMeasurer::new(16), SPACING, 100, 10);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines.len(), 4);
    assert_eq!(pages[0].height, 80);
}

#[test]
fn blank_lines_use_paragraph_spacing() {
    // text 14px, blank 25px: 14 + 25 + 14 + 25 = 78 fits in 80, next text doesn't.
    let input = lines(&["a", "", "b", "", "c"]);
    let pages = paginate(input, &FixedMeasurer::new(10), SPACING, 100, 10);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines, vec!["a", "", "b", ""]);
    assert_eq!(pages[0].height, 78);
    assert_eq!(pages[1].lines, vec!["c"]);
}

#[test]
fn whitespace_only_line_counts_as_blank() {
    let pages = paginate(lines(&["   "]), &FixedMeasurer::new(10), SPACING, 100, 10);
    assert_eq!(pages[0].height, 25);
}

#[test]
fn oversized_line_gets_its_own_page() {
    let measurer = FixedMeasurer {
        char_width: 10,
        line_height: 10,
        tall_height: 500,
    };
    let input = lines(&["a", "b", "TALL line", "c"]);
    let pages = paginate(input, &measurer, SPACING, 100, 10);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].lines, vec!["a", "b"]);
    assert_eq!(pages[1].lines, vec!["TALL line"]);
    assert_eq!(pages[1].height, 504);
    assert_eq!(pages[2].lines, vec!["c"]);
}

#[test]
fn oversized_first_line_is_not_dropped() {
    let measurer = FixedMeasurer {
        char_width: 10,
        line_height: 10,
        tall_height: 1000,
    };
    let pages = paginate(lines(&["TALL"]), &measurer, SPACING, 100, 10);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].lines, vec!["TALL"]);
}

#[test]
fn padding_larger_than_page_isolates_every_line() {
    let input = lines(&["a", "b", "c"]);
    let pages = paginate(input, &FixedMeasurer::new(10), SPACING, 30, 20);
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.lines.len() == 1));
}

#[test]
fn padding_past_half_of_u32_does_not_overflow() {
    let input = lines(&["a", "b"]);
    let pages = paginate(input, &FixedMeasurer::new(10), SPACING, 1200, 3_000_000_000);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].lines, vec!["b"]);

    let huge = Layout {
        padding: u32::MAX,
        ..Layout::default()
    };
    assert_eq!(huge.content_budget(), 0);
    assert!(huge.validate().is_err());
}

#[test]
fn pages_preserve_lines_and_respect_budget() {
    for seed in 0..25 {
        let article = common::sample_article(seed, 12);
        let layout = Layout {
            column_width: 30 + seed as usize,
            max_image_height: 150 + seed as u32 * 37,
            padding: 10,
            spacing: SPACING,
            ..Layout::default()
        };
        let measurer = FixedMeasurer::new(12 + seed as u32 % 5);
        let wrapped = wrap_article(&article, layout.column_width);
        let pages = paginate_article(&article, &measurer, &layout);

        let flattened: Vec<String> = pages.iter().flat_map(|p| p.lines.clone()).collect();
        assert_eq!(flattened, wrapped, "seed {seed}: lines changed");

        for (i, page) in pages.iter().enumerate() {
            assert!(!page.lines.is_empty(), "seed {seed}: page {i} empty");
            assert_eq!(page.height, page_height(page, &measurer));
            assert!(
                page.height <= layout.content_budget() || page.lines.len() == 1,
                "seed {seed}: page {i} is {}px over a {}px budget",
                page.height,
                layout.content_budget(),
            );
        }
    }
}
