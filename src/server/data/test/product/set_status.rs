use super::*;

/// Tests approving a listing with a note.
///
/// Expected: Ok(Some(Product)) with status and note persisted
#[tokio::test]
async fn approves_with_note() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .set_status(SetProductStatusParam {
            product_id: product.id,
            status: ProductStatus::Approved,
            note: Some("Looks fine".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, ProductStatus::Approved);
    assert_eq!(updated.moderation_note.as_deref(), Some("Looks fine"));

    let stored = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(stored.status, ProductStatus::Approved);

    Ok(())
}

/// Tests an absent note clears a previously stored note.
///
/// Verifies that rejecting with a note and then reopening without one leaves no note,
/// and that a rejected listing may move back to pending.
///
/// Expected: Ok(Some(Product)) pending with no note
#[tokio::test]
async fn absent_note_clears_note() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    repo.set_status(SetProductStatusParam {
        product_id: product.id,
        status: ProductStatus::Rejected,
        note: Some("Blurry photos".to_string()),
    })
    .await?;

    let reopened = repo
        .set_status(SetProductStatusParam {
            product_id: product.id,
            status: ProductStatus::Pending,
            note: None,
        })
        .await?
        .unwrap();

    assert_eq!(reopened.status, ProductStatus::Pending);
    assert!(reopened.moderation_note.is_none());

    Ok(())
}

/// Tests setting the status of a non-existent listing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .set_status(SetProductStatusParam {
            product_id: 999,
            status: ProductStatus::Approved,
            note: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
