//! Bout extraction from query result pages.
//!
//! A result page carries a "<N> results found" marker and one table whose
//! first two rows are headers; every following row is one bout read at
//! fixed cell positions.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::query::BoutQuery;
use crate::scraper::client::Fetch;
use crate::scraper::{offset_url, PAGE_SIZE};
use crate::types::{BoutRecord, BoutResult, RikishiBout};

/// Parser for bout query result pages
pub struct BoutParser;

impl BoutParser {
    /// Total result count declared by the page
    ///
    /// Returns `None` when the page carries no "results found" marker,
    /// which the service emits for invalid queries. Distinct from
    /// `Some(0)`, an accepted query matching nothing.
    pub fn result_count(html: &str) -> Option<usize> {
        let document = Html::parse_document(html);
        let text = document.root_element().text().collect::<String>();
        let count_re = Regex::new(r"(\d+) results found").unwrap();
        count_re
            .captures(&text)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Extract all bout rows from one result page
    ///
    /// Returns `None` when the document has no result table; the sequence
    /// is empty when the table holds only its two header rows. Rows that
    /// deviate from the expected shape fail extraction outright.
    pub fn extract_page(html: &str) -> Result<Option<Vec<BoutRecord>>> {
        let document = Html::parse_document(html);
        let table_selector = Selector::parse("table").unwrap();
        let row_selector = Selector::parse("tr").unwrap();

        let Some(table) = document.select(&table_selector).next() else {
            return Ok(None);
        };

        let mut bouts = Vec::new();
        for (index, row) in table.select(&row_selector).enumerate().skip(2) {
            bouts.push(Self::bout_from_row(row, index)?);
        }
        Ok(Some(bouts))
    }

    /// Read one table row at its fixed cell positions
    fn bout_from_row(row: ElementRef, index: usize) -> Result<BoutRecord> {
        let cell_selector = Selector::parse("td").unwrap();
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < 11 {
            return Err(Error::MalformedRow {
                row: index,
                reason: format!("expected 11 cells, found {}", cells.len()),
            });
        }

        Ok(BoutRecord {
            date: cell_text(&cells[0]),
            day: cell_text(&cells[1]),
            rikishi1: Self::rikishi_from_cells(&cells[2..5], index)?,
            result1: Self::result_from_cell(&cells[5], index)?,
            kimarite: cell_text(&cells[6]).trim().to_string(),
            result2: Self::result_from_cell(&cells[7], index)?,
            rikishi2: Self::rikishi_from_cells(&cells[8..11], index)?,
        })
    }

    /// Rank, name/id link, and score cells of one side
    fn rikishi_from_cells(cells: &[ElementRef], index: usize) -> Result<RikishiBout> {
        let link_selector = Selector::parse("a[href]").unwrap();
        let link = cells[1].select(&link_selector).next().ok_or_else(|| {
            Error::MalformedRow {
                row: index,
                reason: "missing rikishi link".to_string(),
            }
        })?;
        let href = link.value().attr("href").unwrap_or_default();
        let Some((_, id)) = href.rsplit_once('=') else {
            return Err(Error::MalformedRow {
                row: index,
                reason: format!("no rikishi id in link target '{href}'"),
            });
        };

        let score_text = cell_text(&cells[2]);
        let tokens: Vec<&str> = score_text.split_whitespace().collect();
        let (score, basho_score) = match tokens.as_slice() {
            // Final-day and playoff rows carry the basho score alone
            [basho] => (basho.to_string(), basho.to_string()),
            [score, basho] => (
                score.to_string(),
                basho.trim_matches(|c| c == '(' || c == ')').to_string(),
            ),
            _ => {
                return Err(Error::MalformedRow {
                    row: index,
                    reason: format!("unparseable score cell '{}'", score_text.trim()),
                });
            }
        };

        Ok(RikishiBout {
            rank: cell_text(&cells[0]),
            name: link.text().collect::<String>(),
            id: id.to_string(),
            score,
            basho_score,
        })
    }

    fn result_from_cell(cell: &ElementRef, index: usize) -> Result<BoutResult> {
        let image_selector = Selector::parse("img").unwrap();
        let image = cell.select(&image_selector).next().ok_or_else(|| {
            Error::MalformedRow {
                row: index,
                reason: "missing result image".to_string(),
            }
        })?;
        let src = image.value().attr("src").unwrap_or_default();
        Ok(BoutResult::from_image(src))
    }
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>()
}

/// Run a bout query against the service, walking all result pages.
///
/// Returns `None` when the service reports the query as invalid or
/// matching nothing. Pages past the first are fetched strictly
/// sequentially at offsets 1000, 2000, … and their records appended in
/// offset order; the first fetch or extraction failure aborts the whole
/// operation and discards any pages already accumulated.
pub async fn run_query<F>(query: &BoutQuery, fetcher: &F) -> Result<Option<Vec<BoutRecord>>>
where
    F: Fetch + ?Sized,
{
    let url = query.build_url()?;
    debug!("built bout query url: {url}");

    debug!("scraping page at offset 0");
    let body = fetcher.fetch(&url).await?;
    let Some(count) = BoutParser::result_count(&body) else {
        debug!("service reported the query as invalid");
        return Ok(None);
    };
    if count == 0 {
        debug!("no results found");
        return Ok(None);
    }
    debug!("{count} results found");

    let Some(mut bouts) = BoutParser::extract_page(&body)? else {
        return Ok(None);
    };

    let mut offset = PAGE_SIZE;
    while offset < count {
        debug!("scraping page at offset {offset}");
        let page_url = offset_url(&url, offset);
        let body = fetcher.fetch(&page_url).await?;
        let page = BoutParser::extract_page(&body)?.ok_or(Error::MissingTable { offset })?;
        bouts.extend(page);
        offset += PAGE_SIZE;
    }

    info!("scraped {} bouts", bouts.len());
    Ok(Some(bouts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::RikishiFilter;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::fmt::Write;
    use std::sync::Mutex;

    const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<p>2 results found, breakdown by kimarite displayed.</p>
<table border="0">
  <tr><td colspan="11">Query result</td></tr>
  <tr>
    <th>Basho</th><th>Day</th><th colspan="3">East</th><th></th>
    <th>Kimarite</th><th></th><th colspan="3">West</th>
  </tr>
  <tr>
    <td>202301</td>
    <td>1</td>
    <td>M1</td>
    <td><a href="Rikishi.aspx?r=123">Takakeisho</a></td>
    <td>1-0</td>
    <td><img src="img/hoshi_shiro.gif"></td>
    <td>  oshidashi  </td>
    <td><img src="img/hoshi_kuro.gif"></td>
    <td>M2</td>
    <td><a href="Rikishi.aspx?r=456">Meisei</a></td>
    <td>0-1</td>
  </tr>
  <tr>
    <td>202301</td>
    <td>2</td>
    <td>Y1</td>
    <td><a href="Rikishi.aspx?r=321">Terunofuji</a></td>
    <td>2 (2-0)</td>
    <td><img src="img/hoshi_shiro.gif"></td>
    <td>yorikiri</td>
    <td><img src="img/hoshi_kuro.gif"></td>
    <td>K1</td>
    <td><a href="Rikishi.aspx?r=654">Daieisho</a></td>
    <td>0 (0-2)</td>
  </tr>
</table>
</body>
</html>"#;

    #[test]
    fn test_result_count() {
        assert_eq!(BoutParser::result_count(SAMPLE_HTML), Some(2));
    }

    #[test]
    fn test_result_count_zero() {
        let html = "<html><body><p>0 results found.</p></body></html>";
        assert_eq!(BoutParser::result_count(html), Some(0));
    }

    #[test]
    fn test_result_count_invalid_query() {
        let html = "<html><body><p>Please check your query.</p></body></html>";
        assert_eq!(BoutParser::result_count(html), None);
    }

    #[test]
    fn test_extract_page_without_table() {
        let records = BoutParser::extract_page("<html><body></body></html>").unwrap();
        assert!(records.is_none());
    }

    #[test]
    fn test_extract_header_only_table() {
        let html = r#"<html><body><table>
            <tr><td>Query result</td></tr>
            <tr><th>Basho</th></tr>
        </table></body></html>"#;
        let records = BoutParser::extract_page(html).unwrap().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_single_row_fields() {
        let records = BoutParser::extract_page(SAMPLE_HTML).unwrap().unwrap();
        assert_eq!(records.len(), 2);

        let bout = &records[0];
        assert_eq!(
            bout.row(),
            [
                "202301",
                "1",
                "M1",
                "Takakeisho",
                "123",
                "1-0",
                "1-0",
                "win",
                "oshidashi",
                "loss",
                "M2",
                "Meisei",
                "456",
                "0-1",
                "0-1",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn test_mid_basho_score_cell() {
        let records = BoutParser::extract_page(SAMPLE_HTML).unwrap().unwrap();
        let bout = &records[1];
        assert_eq!(bout.rikishi1.score, "2");
        assert_eq!(bout.rikishi1.basho_score, "2-0");
        assert_eq!(bout.rikishi2.score, "0");
        assert_eq!(bout.rikishi2.basho_score, "0-2");
    }

    #[test]
    fn test_final_day_score_cell() {
        let html = page_html(1, 0, |_| "7".to_string());
        let records = BoutParser::extract_page(&html).unwrap().unwrap();
        assert_eq!(records[0].rikishi1.score, "7");
        assert_eq!(records[0].rikishi1.basho_score, "7");
    }

    #[test]
    fn test_kimarite_trimmed() {
        let records = BoutParser::extract_page(SAMPLE_HTML).unwrap().unwrap();
        assert_eq!(records[0].kimarite, "oshidashi");
    }

    #[test]
    fn test_short_row_fails() {
        let html = r#"<html><body><table>
            <tr><td>Query result</td></tr>
            <tr><th>Basho</th></tr>
            <tr><td>202301</td><td>1</td><td>M1</td></tr>
        </table></body></html>"#;
        let err = BoutParser::extract_page(html).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn test_missing_link_fails() {
        let html = page_html(1, 0, |_| "1-0".to_string())
            .replace(r#"<a href="Rikishi.aspx?r=1000">R0</a>"#, "R0");
        let err = BoutParser::extract_page(&html).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { .. }));
    }

    /// Build a result page with `rows` bouts; rikishi ids and names are
    /// numbered from `first`, and `score` supplies the score cell text.
    fn page_html(rows: usize, first: usize, score: impl Fn(usize) -> String) -> String {
        let mut html = String::from(
            "<html><body><p>results page</p><table>\
             <tr><td>Query result</td></tr><tr><th>Basho</th></tr>",
        );
        for i in first..first + rows {
            write!(
                html,
                "<tr><td>202301</td><td>1</td>\
                 <td>M1</td><td><a href=\"Rikishi.aspx?r={id}\">R{n}</a></td><td>{score}</td>\
                 <td><img src=\"img/hoshi_shiro.gif\"></td>\
                 <td>oshidashi</td>\
                 <td><img src=\"img/hoshi_kuro.gif\"></td>\
                 <td>M2</td><td><a href=\"Rikishi.aspx?r={opp}\">W{n}</a></td><td>0-1</td></tr>",
                id = 1000 + i,
                n = i,
                score = score(i),
                opp = 5000 + i,
            )
            .unwrap();
        }
        html.push_str("</table></body></html>");
        html
    }

    struct StubFetcher {
        pages: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(pages: HashMap<String, String>) -> Self {
            Self {
                pages,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("unexpected url: {url}"))
        }
    }

    #[tokio::test]
    async fn test_run_query_single_page() {
        let query = BoutQuery::new().basho(202301);
        let url = query.build_url().unwrap();

        let mut page = String::from("<html><body><p>3 results found.</p></body></html>");
        page = page.replace("</body>", &format!("{}</body>", table_only(3, 0)));
        let fetcher = StubFetcher::new(HashMap::from([(url.clone(), page)]));

        let bouts = run_query(&query, &fetcher).await.unwrap().unwrap();
        assert_eq!(bouts.len(), 3);
        assert_eq!(*fetcher.calls.lock().unwrap(), vec![url]);
    }

    #[tokio::test]
    async fn test_run_query_paginates_in_offset_order() {
        let query = BoutQuery::new().rikishi1(RikishiFilter::new().set("rank", "Y"));
        let url = query.build_url().unwrap();

        let mut page0 = String::from("<html><body><p>2500 results found.</p></body></html>");
        page0 = page0.replace("</body>", &format!("{}</body>", table_only(1000, 0)));
        let page1 = format!("<html><body>{}</body></html>", table_only(1000, 1000));
        let page2 = format!("<html><body>{}</body></html>", table_only(500, 2000));

        let fetcher = StubFetcher::new(HashMap::from([
            (url.clone(), page0),
            (offset_url(&url, 1000), page1),
            (offset_url(&url, 2000), page2),
        ]));

        let bouts = run_query(&query, &fetcher).await.unwrap().unwrap();
        assert_eq!(bouts.len(), 2500);
        for (i, bout) in bouts.iter().enumerate() {
            assert_eq!(bout.rikishi1.name, format!("R{i}"));
        }

        assert_eq!(
            *fetcher.calls.lock().unwrap(),
            vec![url.clone(), offset_url(&url, 1000), offset_url(&url, 2000)]
        );
    }

    #[tokio::test]
    async fn test_run_query_invalid_is_absent() {
        let query = BoutQuery::new();
        let url = query.build_url().unwrap();
        let page = "<html><body><p>Please check your query.</p></body></html>".to_string();
        let fetcher = StubFetcher::new(HashMap::from([(url, page)]));

        assert!(run_query(&query, &fetcher).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_query_zero_results_is_absent() {
        let query = BoutQuery::new();
        let url = query.build_url().unwrap();
        let page = "<html><body><p>0 results found.</p></body></html>".to_string();
        let fetcher = StubFetcher::new(HashMap::from([(url, page)]));

        assert!(run_query(&query, &fetcher).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_query_fetch_failure_discards_pages() {
        let query = BoutQuery::new();
        let url = query.build_url().unwrap();
        let mut page0 = String::from("<html><body><p>1500 results found.</p></body></html>");
        page0 = page0.replace("</body>", &format!("{}</body>", table_only(1000, 0)));
        // No page at offset 1000: the stub errors and the run fails whole.
        let fetcher = StubFetcher::new(HashMap::from([(url, page0)]));

        let err = run_query(&query, &fetcher).await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    /// Table fragment with the two header rows and `rows` generated bouts
    fn table_only(rows: usize, first: usize) -> String {
        let full = page_html(rows, first, |_| "1-0".to_string());
        full.replace("<html><body><p>results page</p>", "")
            .replace("</body></html>", "")
    }
}
