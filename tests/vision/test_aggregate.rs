// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Region aggregation tests against realistic Tesseract TSV output
//!
//! These tests verify that aggregation:
//! - Emits nothing when the target level is absent
//! - Carries word confidence only at word granularity
//! - Keeps the opening row's top-left corner and grows the bottom-right
//! - Is repeatable for the same input

use ocr_bbox_extractor::vision::ocr::{aggregate, parse_tsv, Granularity, Token};

/// Two blocks: a two-line heading paragraph and a one-line footer
const RECEIPT_TSV: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext
1\t1\t0\t0\t0\t0\t0\t0\t800\t600\t-1\t
2\t1\t1\t0\t0\t0\t40\t30\t400\t120\t-1\t
3\t1\t1\t1\t0\t0\t40\t30\t400\t120\t-1\t
4\t1\t1\t1\t1\t0\t40\t30\t380\t50\t-1\t
5\t1\t1\t1\t1\t1\t40\t30\t150\t50\t95.8\tACME
5\t1\t1\t1\t1\t2\t210\t32\t230\t52\t88.2\tGROCERY
4\t1\t1\t1\t2\t0\t40\t100\t300\t50\t-1\t
5\t1\t1\t1\t2\t1\t40\t100\t120\t50\t62.0\tMain
5\t1\t1\t1\t2\t2\t170\t100\t170\t50\t41.7\tStreet
5\t1\t1\t1\t2\t3\t350\t100\t20\t50\t-1\t
2\t1\t2\t0\t0\t0\t40\t500\t300\t40\t-1\t
3\t1\t2\t1\t0\t0\t40\t500\t300\t40\t-1\t
4\t1\t2\t1\t1\t0\t40\t500\t300\t40\t-1\t
5\t1\t2\t1\t1\t1\t40\t500\t120\t40\t93.0\tTotal
5\t1\t2\t1\t1\t2\t180\t500\t160\t40\t90.4\t$12.40
";

fn tokens() -> Vec<Token> {
    parse_tsv(RECEIPT_TSV).expect("sample TSV should parse")
}

#[test]
fn test_sample_parses_all_rows() {
    assert_eq!(tokens().len(), 15);
}

#[test]
fn test_words_keep_source_confidence() {
    let tokens = tokens();
    let regions = aggregate(&tokens, Granularity::Word);

    let words: Vec<(&str, Option<i32>)> = regions
        .iter()
        .map(|r| (r.text.as_str(), r.confidence))
        .collect();
    assert_eq!(
        words,
        vec![
            ("ACME", Some(95)),
            ("GROCERY", Some(88)),
            ("Main", Some(62)),
            ("Street", Some(41)),
            ("Total", Some(93)),
            ("$12.40", Some(90)),
        ]
    );

    for region in &regions {
        let source = tokens
            .iter()
            .find(|t| t.level == 5 && t.text == region.text)
            .unwrap();
        assert_eq!(region.confidence, Some(source.confidence));
        assert!(source.confidence > 0);
    }
}

#[test]
fn test_lines() {
    let regions = aggregate(&tokens(), Granularity::Line);
    let texts: Vec<&str> = regions.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec![" ACME GROCERY", " Main Street ", " Total $12.40"]);

    // GROCERY extends the first line to x 440, y 84
    assert_eq!(
        (regions[0].x_min, regions[0].y_min, regions[0].x_max, regions[0].y_max),
        (40, 30, 440, 84)
    );
    assert!(regions.iter().all(|r| r.confidence.is_none()));
}

#[test]
fn test_paragraphs_and_blocks() {
    let tokens = tokens();
    for granularity in [Granularity::Paragraph, Granularity::Block] {
        let regions = aggregate(&tokens, granularity);
        assert_eq!(regions.len(), 2, "{} regions", granularity);
        assert!(regions[0].text.contains("ACME GROCERY"));
        assert!(regions[0].text.contains("Main Street"));
        assert!(regions[1].text.contains("Total $12.40"));
        assert_eq!((regions[1].x_min, regions[1].y_min), (40, 500));
    }
}

#[test]
fn test_page_covers_everything() {
    let regions = aggregate(&tokens(), Granularity::Page);
    assert_eq!(regions.len(), 1);
    assert_eq!(
        (regions[0].x_min, regions[0].y_min, regions[0].x_max, regions[0].y_max),
        (0, 0, 800, 600)
    );
}

#[test]
fn test_regions_contain_their_descendants() {
    let tokens = tokens();
    for granularity in [
        Granularity::Line,
        Granularity::Paragraph,
        Granularity::Block,
        Granularity::Page,
    ] {
        let target = granularity.level();
        let regions = aggregate(&tokens, granularity);
        let mut next = 0;
        let mut open: Option<&Token> = None;

        for token in &tokens {
            if token.level == target {
                open = Some(token);
                let region = &regions[next];
                assert_eq!((region.x_min, region.y_min), (token.x, token.y));
                next += 1;
            } else if token.level > target && open.is_some() {
                let region = &regions[next - 1];
                assert!(region.x_max >= token.x + token.width);
                assert!(region.y_max >= token.y + token.height);
            }
        }
        assert_eq!(next, regions.len());
    }
}

#[test]
fn test_missing_target_level_yields_nothing() {
    let words_only: Vec<Token> = tokens().into_iter().filter(|t| t.level == 5).collect();
    assert!(aggregate(&words_only, Granularity::Line).is_empty());
    assert!(aggregate(&words_only, Granularity::Page).is_empty());
}

#[test]
fn test_empty_input_for_every_granularity() {
    for granularity in Granularity::ALL {
        assert!(aggregate(&[], granularity).is_empty());
    }
}

#[test]
fn test_repeatable() {
    let tokens = tokens();
    for granularity in Granularity::ALL {
        assert_eq!(aggregate(&tokens, granularity), aggregate(&tokens, granularity));
    }
}
