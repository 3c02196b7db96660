use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Result, bail};
use serde_json::json;

use crate::books::BooksClient;
use crate::core::AppConfig;
use crate::ui::{SearchSession, SystemViewer, TcpProbe};

pub async fn run(config: AppConfig, query: String, open: Option<usize>, json: bool) -> Result<()> {
    if open == Some(0) {
        bail!("Results are numbered from 1");
    }

    let probe = TcpProbe::for_url(&config.api_base_url, config.connect_timeout)?;
    let client = BooksClient::new(&config)?;
    let mut session = SearchSession::new(client, Arc::new(probe), Box::new(SystemViewer));

    session.submit(&query).await;
    session.wait_latest().await;

    if json {
        println!(
            "{}",
            json!({
                "query": query,
                "results": session.adapter().books(),
            })
        );
    } else {
        session.render(&mut io::stdout().lock())?;
    }

    if let Some(n) = open {
        open_result(&session, n, &mut io::stdout().lock())?;
    }

    Ok(())
}

/// Open result `n` (1-based), telling the user when there's nothing to
/// open.
pub(crate) fn open_result<W: Write>(
    session: &SearchSession,
    n: usize,
    out: &mut W,
) -> Result<bool> {
    if n > 0 && session.open(n - 1) {
        return Ok(true);
    }
    writeln!(out, "Can't open result {}", n)?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::AssumeOnline;
    use crate::ui::viewer::tests::RecordingViewer;
    use mockito::Matcher;

    #[tokio::test]
    async fn it_reports_results_that_cannot_be_opened() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/books/v1/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"items": [{"volumeInfo": {"title": "Dune", "infoLink": "https://example.com/dune"}}]}"#,
            )
            .create_async()
            .await;

        let viewer = RecordingViewer::default();
        let client = BooksClient::new(&AppConfig::with_api_base_url(&server.url())).unwrap();
        let mut session =
            SearchSession::new(client, Arc::new(AssumeOnline), Box::new(viewer.clone()));
        session.submit("dune").await;
        session.wait_latest().await;

        let mut out = Vec::new();
        assert!(open_result(&session, 1, &mut out).unwrap());
        assert!(out.is_empty());

        assert!(!open_result(&session, 7, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Can't open result 7\n");
        assert_eq!(viewer.opened(), vec!["https://example.com/dune".to_string()]);
    }
}
