use super::*;

/// Tests creating a school with its canteens.
///
/// Verifies that the school row and one row per canteen are stored, and that the
/// returned domain model carries the generated identifiers.
///
/// Expected: Ok with school and canteens created
#[tokio::test]
async fn creates_school_with_canteens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = School::new(
        "ISEP",
        "Instituto Superior de Engenharia do Porto",
        vec![
            Canteen::new(
                "Cantina do H",
                Some(GeographicalLocation::new(41.1780, -8.6080).unwrap()),
            )
            .unwrap(),
            Canteen::new("Bar do F", None).unwrap(),
        ],
    )
    .unwrap();

    let repo = SchoolRepository::new(db);
    let created = repo.create(&school).await?;

    assert!(created.id.is_some());
    assert_eq!(created.acronym, "ISEP");
    assert_eq!(created.canteens().len(), 2);
    assert!(created.canteens().iter().all(|c| c.id.is_some()));
    assert_eq!(
        created.canteens()[0].location,
        Some(GeographicalLocation {
            latitude: 41.1780,
            longitude: -8.6080
        })
    );
    assert!(created.canteens()[1].location.is_none());

    let stored = entity::prelude::Canteen::find()
        .filter(entity::canteen::Column::SchoolId.eq(created.id.unwrap()))
        .count(db)
        .await?;
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests creating a school whose acronym is already stored.
///
/// Verifies that the unique index rejects the insert as a unique constraint violation
/// and that no canteen of the rejected school is left behind.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicated_acronym() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::school::SchoolFactory::new(db)
        .acronym("ISEP")
        .build()
        .await?;

    let school = School::new("ISEP", "Another", vec![Canteen::new("Bar", None).unwrap()]).unwrap();

    let repo = SchoolRepository::new(db);
    let result = repo.create(&school).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Canteen::find().count(db).await?, 0);

    Ok(())
}
