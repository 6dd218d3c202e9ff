use crate::domain::a002_order::api;
use crate::shared::date_utils;
use crate::shared::notice::{use_notice, NoticeService};
use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::domain::a002_order::aggregate::{Order, OrderDto, OrderId};
use leptos::prelude::*;

/// ViewModel for the order create / edit modal
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub open: RwSignal<bool>,
    pub customer_id: RwSignal<Option<CustomerId>>,
    pub editing: RwSignal<Option<OrderId>>,
    pub description: RwSignal<String>,
    /// Raw `datetime-local` value
    pub order_date: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    notice: NoticeService,
}

impl OrderDetailsViewModel {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            customer_id: RwSignal::new(None),
            editing: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            order_date: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            notice: use_notice(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.get().is_some()
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            "Редактировать заказ".to_string()
        } else {
            "Создать заказ".to_string()
        }
    }

    pub fn open_create(&self, customer_id: CustomerId) {
        self.clear();
        self.customer_id.set(Some(customer_id));
        self.open.set(true);
    }

    /// Loads the order first; a load failure is reported through `on_error`
    /// because the modal is not shown yet.
    pub fn open_edit(&self, customer_id: CustomerId, order_id: OrderId, on_error: Callback<String>) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_order(customer_id, order_id).await {
                Ok(order) => this.fill(customer_id, &order),
                Err(e) => {
                    log::error!("Failed to load order {}: {}", order_id, e);
                    on_error.run(format!("Ошибка при загрузке данных заказа: {}", e));
                }
            }
        });
    }

    fn fill(&self, customer_id: CustomerId, order: &Order) {
        let dto = OrderDto::from(order);
        self.customer_id.set(Some(customer_id));
        self.editing.set(Some(order.id));
        self.description.set(dto.description);
        self.order_date.set(
            dto.order_date
                .as_ref()
                .map(date_utils::to_input_value)
                .unwrap_or_default(),
        );
        self.error.set(None);
        self.open.set(true);
    }

    fn clear(&self) {
        self.editing.set(None);
        self.description.set(String::new());
        self.order_date.set(String::new());
        self.error.set(None);
    }

    pub fn cancel(&self) {
        self.clear();
        self.open.set(false);
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() {
            return;
        }
        let Some(customer_id) = self.customer_id.get_untracked() else {
            self.error.set(Some("Выберите клиента".to_string()));
            return;
        };
        let dto = match build_dto(
            &self.description.get_untracked(),
            &self.order_date.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let editing = self.editing.get_untracked();
        self.is_saving.set(true);
        self.error.set(None);

        let this = *self;
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(order_id) => api::update_order(customer_id, order_id, &dto).await,
                None => api::create_order(customer_id, &dto).await,
            };
            this.is_saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Order {} saved for customer {}", saved.id, customer_id);
                    this.notice.show(if editing.is_some() {
                        "Заказ успешно обновлен"
                    } else {
                        "Заказ успешно создан"
                    });
                    this.cancel();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save order: {}", e);
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

/// Turns the raw inputs into a request body, or a message for the banner.
fn build_dto(description: &str, order_date: &str) -> Result<OrderDto, String> {
    let dto = OrderDto {
        description: description.trim().to_string(),
        order_date: date_utils::parse_input_value(order_date)?,
    };
    dto.validate().map_err(|e| e.to_string())?;
    Ok(dto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_dto_trims_and_validates() {
        let dto = build_dto("  Поставка бумаги ", "").unwrap();
        assert_eq!(dto.description, "Поставка бумаги");
        assert_eq!(dto.order_date, None);

        assert_eq!(build_dto("   ", "").unwrap_err(), "Описание заказа обязательно");
        assert!(build_dto(&"x".repeat(256), "").is_err());
    }

    #[test]
    fn build_dto_parses_the_date_input() {
        let dto = build_dto("a", "2024-05-01T10:30").unwrap();
        assert_eq!(dto.order_date.map(|d| d.to_string()).as_deref(), Some("2024-05-01 10:30:00"));
        assert_eq!(build_dto("a", "01.05.2024").unwrap_err(), "Неверный формат даты");
    }
}
