use std::io::{Read, Seek, SeekFrom};

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;
use validator::Validate;

use crate::domain::stock::NewStockItem;
use crate::domain::types::Imei;
use crate::forms::FormError;

#[derive(MultipartForm)]
/// CSV upload of IMEI stock: `imei,product[,shop_id]` with a header row.
pub struct UploadStockForm {
    pub dealer_id: Text<i32>,
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

impl UploadStockForm {
    /// Parses the uploaded CSV into stock items for the given dealer.
    /// Rows with a malformed IMEI fail the whole upload so a typo cannot
    /// silently drop half a consignment.
    pub fn parse(&mut self) -> Result<Vec<NewStockItem>, FormError> {
        self.csv
            .file
            .seek(SeekFrom::Start(0))
            .map_err(|e| FormError::Csv(e.to_string()))?;

        let mut contents = String::new();
        self.csv
            .file
            .read_to_string(&mut contents)
            .map_err(|e| FormError::Csv(e.to_string()))?;

        let mut rdr = csv::Reader::from_reader(contents.as_bytes());
        let headers = rdr
            .headers()
            .map_err(|e| FormError::Csv(e.to_string()))?
            .clone();

        let mut items = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| FormError::Csv(e.to_string()))?;

            let mut imei = "";
            let mut product = "";
            let mut shop_id = None;

            for (i, field) in record.iter().enumerate() {
                match headers.get(i) {
                    Some("imei") => imei = field,
                    Some("product") => product = field,
                    Some("shop_id") => {
                        shop_id = field.trim().parse::<i32>().ok();
                    }
                    _ => continue,
                }
            }

            let imei = Imei::new(imei).map_err(|_| FormError::InvalidImei)?;
            items.push(NewStockItem::new(
                imei,
                product.to_string(),
                self.dealer_id.0,
                shop_id,
            ));
        }

        Ok(items)
    }
}

#[derive(Debug, Deserialize)]
/// Checkbox selection posted from the stock table; `item_ids` repeats.
pub struct TransferStockForm {
    pub shop_id: i32,
    #[serde(default)]
    pub item_ids: Vec<i32>,
}

impl TransferStockForm {
    /// Parses an urlencoded body with repeated `item_ids` fields.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|e| FormError::Malformed(e.to_string()))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for swapping a faulty handset for a replacement.
pub struct SwapImeiForm {
    #[validate(length(equal = 15))]
    pub old_imei: String,
    #[validate(length(equal = 15))]
    pub new_imei: String,
}

impl SwapImeiForm {
    pub fn imeis(&self) -> Result<(Imei, Imei), FormError> {
        let old = Imei::new(&self.old_imei).map_err(|_| FormError::InvalidImei)?;
        let new = Imei::new(&self.new_imei).map_err(|_| FormError::InvalidImei)?;
        Ok((old, new))
    }
}
