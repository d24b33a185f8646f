use entity::plants;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set};

struct SamplePlant {
    name: &'static str,
    scientific_name: &'static str,
    description: &'static str,
    care_instructions: &'static str,
    photo_path: &'static str,
}

const SAMPLE_PLANTS: &[SamplePlant] = &[
    SamplePlant {
        name: "Фикус",
        scientific_name: "Ficus elastica",
        description: "Универсальное комнатное растение",
        care_instructions: "Яркий рассеянный свет, умеренный полив",
        photo_path: "images/ficus.jpeg",
    },
    SamplePlant {
        name: "Сансевиерия",
        scientific_name: "Sansevieria trifasciata",
        description: "Неприхотливое",
        care_instructions: "Свет — от тени до яркого; редкий полив",
        photo_path: "images/sanseveriya.jpeg",
    },
];

/// Fills an empty catalogue with a couple of sample plants. Returns the number of inserted rows.
pub async fn seed_plants<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    if plants::Entity::find().count(db).await? > 0 {
        return Ok(0);
    }

    let models = SAMPLE_PLANTS.iter().map(|plant| plants::ActiveModel {
        name: Set(plant.name.to_owned()),
        scientific_name: Set(Some(plant.scientific_name.to_owned())),
        description: Set(Some(plant.description.to_owned())),
        care_instructions: Set(Some(plant.care_instructions.to_owned())),
        photo_path: Set(Some(plant.photo_path.to_owned())),
        ..Default::default()
    });

    let inserted = plants::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    info!("seeded {inserted} sample plants");

    Ok(inserted)
}
