use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::PriceExtraId,
    price_extra::{
        event::{CreatePriceExtra, UpdatePriceExtra},
        PriceExtra,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceExtrasResponse {
    pub items: Vec<PriceExtraResponse>,
}

impl From<Vec<PriceExtra>> for PriceExtrasResponse {
    fn from(value: Vec<PriceExtra>) -> Self {
        Self {
            items: value.into_iter().map(PriceExtraResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceExtraResponse {
    pub id: PriceExtraId,
    pub extra_name: String,
    pub extra_price: Decimal,
}

impl From<PriceExtra> for PriceExtraResponse {
    fn from(value: PriceExtra) -> Self {
        let PriceExtra {
            price_extra_id,
            extra_name,
            extra_price,
        } = value;
        Self {
            id: price_extra_id,
            extra_name,
            extra_price,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePriceExtraRequest {
    #[garde(length(min = 1))]
    pub extra_name: String,
    #[garde(skip)]
    pub extra_price: Decimal,
}

impl From<CreatePriceExtraRequest> for CreatePriceExtra {
    fn from(value: CreatePriceExtraRequest) -> Self {
        let CreatePriceExtraRequest {
            extra_name,
            extra_price,
        } = value;
        Self {
            extra_name,
            extra_price,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriceExtraRequest {
    #[garde(length(min = 1))]
    pub extra_name: Option<String>,
    #[garde(skip)]
    pub extra_price: Option<Decimal>,
}

#[derive(new)]
pub struct UpdatePriceExtraRequestWithId(PriceExtraId, UpdatePriceExtraRequest);
impl From<UpdatePriceExtraRequestWithId> for UpdatePriceExtra {
    fn from(value: UpdatePriceExtraRequestWithId) -> Self {
        let UpdatePriceExtraRequestWithId(
            price_extra_id,
            UpdatePriceExtraRequest {
                extra_name,
                extra_price,
            },
        ) = value;
        UpdatePriceExtra {
            price_extra_id,
            extra_name,
            extra_price,
        }
    }
}
