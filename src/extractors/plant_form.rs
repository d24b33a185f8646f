use crate::{error, utils::Upload, Error};
use axum::extract::{FromRequest, Multipart, Request};

/// Raw fields of a submitted plant form, before any normalization or validation.
#[derive(Debug, Default)]
pub struct PlantForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub care_instructions: Option<String>,
    pub photo: Option<Upload>,
}

impl PlantForm {
    /// The uploaded photo, if the client actually picked a file.
    pub fn photo(&self) -> Option<&Upload> {
        self.photo.as_ref().filter(|upload| !upload.is_empty())
    }
}

impl<S> FromRequest<S> for PlantForm
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
            warn!("rejected plant form: {}", rejection.body_text());
            error::MULTIPART_INVALID
        })?;

        let mut form = PlantForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "photo" => {
                    let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
                    let content = field.bytes().await?;

                    form.photo = Some(Upload { file_name, content });
                }
                "id" => form.id = Some(field.text().await?),
                "name" => form.name = Some(field.text().await?),
                "scientificName" => form.scientific_name = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "careInstructions" => form.care_instructions = Some(field.text().await?),
                _ => trace!("ignoring unknown form field {name:?}"),
            }
        }

        Ok(form)
    }
}
