use tracing::{debug, instrument};

use prj_model::{Cursor, ProjectRecord};

use crate::{error::CoreError, service::ResourceService};

enum WalkState {
    Fetching(Option<Cursor>),
    Done,
}

/// Follow the listing cursor until it runs out and return every record, in page order.
///
/// Fail-fast: the first listing error aborts the walk and whatever was fetched so far is discarded.
#[instrument(level = "debug", skip(service))]
pub async fn collect_all(service: &dyn ResourceService) -> Result<Vec<ProjectRecord>, CoreError> {
    let mut records = Vec::new();
    let mut pages = 0;
    let mut state = WalkState::Fetching(None);

    while let WalkState::Fetching(cursor) = state {
        pages += 1;
        let page = service
            .list(cursor.as_ref())
            .await
            .map_err(|source| CoreError::Listing { page: pages, source })?;

        let next = page.continuation().cloned();
        debug!(
            page = pages,
            records = page.records.len(),
            more = next.is_some(),
            "fetched project page"
        );
        records.extend(page.records);

        state = match next {
            Some(cursor) => WalkState::Fetching(Some(cursor)),
            None => WalkState::Done,
        };
    }

    debug!(pages, total = records.len(), "listing exhausted");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ServiceError, testing::FakeService};
    use prj_model::Page;
    use time::macros::datetime;
    use uuid::Uuid;

    fn record(name: &str) -> ProjectRecord {
        ProjectRecord::new(Uuid::new_v4(), name, datetime!(2023-01-01 0:00 UTC))
    }

    fn names(records: &[ProjectRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let service = FakeService::new().with_pages(vec![
            Ok(Page::new(vec![record("a"), record("b")], Some(Cursor::from("x")))),
            Ok(Page::new(vec![record("c")], Some(Cursor::from("")))),
        ]);

        let records = collect_all(&service).await.unwrap();
        assert_eq!(names(&records), ["a", "b", "c"]);
        assert_eq!(service.cursors(), [None, Some(Cursor::from("x"))]);
    }

    #[tokio::test]
    async fn missing_cursor_ends_after_first_page() {
        let service = FakeService::new().with_pages(vec![Ok(Page::last(vec![record("only")]))]);

        let records = collect_all(&service).await.unwrap();
        assert_eq!(names(&records), ["only"]);
        assert_eq!(service.cursors().len(), 1);
    }

    #[tokio::test]
    async fn empty_listing_is_not_an_error() {
        let service = FakeService::new().with_pages(vec![Ok(Page::last(vec![]))]);
        assert!(collect_all(&service).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_page_with_cursor_keeps_walking() {
        let service = FakeService::new().with_pages(vec![
            Ok(Page::new(vec![], Some(Cursor::from("t1")))),
            Ok(Page::new(vec![record("late")], None)),
        ]);

        let records = collect_all(&service).await.unwrap();
        assert_eq!(names(&records), ["late"]);
        assert_eq!(service.cursors().len(), 2);
    }

    #[tokio::test]
    async fn error_on_later_page_drops_everything() {
        let service = FakeService::new().with_pages(vec![
            Ok(Page::new(vec![record("a"), record("b")], Some(Cursor::from("x")))),
            Err(ServiceError::Status {
                status: 503,
                body: "unavailable".into(),
            }),
            Ok(Page::last(vec![record("never")])),
        ]);

        let err = collect_all(&service).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Listing {
                page: 2,
                source: ServiceError::Status { status: 503, .. }
            }
        ));
        assert_eq!(service.cursors().len(), 2);
    }

    #[tokio::test]
    async fn error_on_first_page() {
        let service = FakeService::new()
            .with_pages(vec![Err(ServiceError::Transport("connection refused".into()))]);

        let err = collect_all(&service).await.unwrap_err();
        assert!(matches!(err, CoreError::Listing { page: 1, .. }));
    }
}
