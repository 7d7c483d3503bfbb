use derive_new::new;
use garde::Validate;
use kernel::model::{
    court::{
        event::{CreateCourt, UpdateCourt},
        Court,
    },
    id::CourtId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtsResponse {
    pub items: Vec<CourtResponse>,
}

impl From<Vec<Court>> for CourtsResponse {
    fn from(value: Vec<Court>) -> Self {
        Self {
            items: value.into_iter().map(CourtResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtResponse {
    pub id: CourtId,
    pub court_name: String,
    pub covered: bool,
    pub capacity: i32,
    pub base_price: Decimal,
}

impl From<Court> for CourtResponse {
    fn from(value: Court) -> Self {
        let Court {
            court_id,
            court_name,
            covered,
            capacity,
            base_price,
        } = value;
        Self {
            id: court_id,
            court_name,
            covered,
            capacity,
            base_price,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourtRequest {
    #[garde(length(min = 1))]
    pub court_name: String,
    #[garde(skip)]
    #[serde(default)]
    pub covered: bool,
    #[garde(range(min = 1))]
    pub capacity: i32,
    #[garde(skip)]
    pub base_price: Decimal,
}

impl From<CreateCourtRequest> for CreateCourt {
    fn from(value: CreateCourtRequest) -> Self {
        let CreateCourtRequest {
            court_name,
            covered,
            capacity,
            base_price,
        } = value;
        Self {
            court_name,
            covered,
            capacity,
            base_price,
        }
    }
}

// 更新リクエストは部分更新。未指定のフィールドは現在値を維持する
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourtRequest {
    #[garde(length(min = 1))]
    pub court_name: Option<String>,
    #[garde(skip)]
    pub covered: Option<bool>,
    #[garde(range(min = 1))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub base_price: Option<Decimal>,
}

#[derive(new)]
pub struct UpdateCourtRequestWithId(CourtId, UpdateCourtRequest);
impl From<UpdateCourtRequestWithId> for UpdateCourt {
    fn from(value: UpdateCourtRequestWithId) -> Self {
        let UpdateCourtRequestWithId(
            court_id,
            UpdateCourtRequest {
                court_name,
                covered,
                capacity,
                base_price,
            },
        ) = value;
        UpdateCourt {
            court_id,
            court_name,
            covered,
            capacity,
            base_price,
        }
    }
}
