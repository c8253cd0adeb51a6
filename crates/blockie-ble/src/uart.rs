//! GATT registration and advertising against BlueZ

use std::sync::Arc;

use blockie_core::Identity;
use bluer::adv::{Advertisement, AdvertisementHandle};
use bluer::gatt::local::{
    Application, ApplicationHandle, Characteristic, CharacteristicNotify,
    CharacteristicNotifyMethod, CharacteristicRead, CharacteristicWrite, CharacteristicWriteMethod,
    Service,
};
use bluer::Adapter;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use crate::config::UartServiceConfig;
use crate::error::{BleUartError, Result};
use crate::handler::{handle_rx_write, RxState};
use crate::observer::DeliveryObserver;
use crate::protocol::{
    UART_RX_CHARACTERISTIC_UUID, UART_SERVICE_UUID, UART_TX_CHARACTERISTIC_UUID,
};

// ----------------------------------------------------------------------------
// UART Service
// ----------------------------------------------------------------------------

/// BLE UART service: one Nordic UART GATT service registered with BlueZ.
///
/// Owns the sender identity; the RX write handler is its only writer. The
/// registration and advertisement handles are held for the lifetime of the
/// service, dropping them unregisters from bluetoothd.
pub struct UartService {
    adapter: Adapter,
    config: UartServiceConfig,
    identity: Arc<Mutex<Identity>>,
    observer: Arc<dyn DeliveryObserver>,
    _app_handle: Option<ApplicationHandle>,
    _adv_handle: Option<AdvertisementHandle>,
}

impl UartService {
    /// Open a BlueZ session and prepare the default adapter.
    pub async fn new(
        config: UartServiceConfig,
        observer: Arc<dyn DeliveryObserver>,
    ) -> Result<Self> {
        let session = bluer::Session::new().await.map_err(BleUartError::Session)?;
        let adapter = session
            .default_adapter()
            .await
            .map_err(BleUartError::Adapter)?;

        if !adapter.is_powered().await.unwrap_or(false) {
            adapter
                .set_powered(true)
                .await
                .map_err(BleUartError::PowerOn)?;
        }
        info!("using Bluetooth adapter {}", adapter.name());

        let identity = Arc::new(Mutex::new(Identity::new(config.initial_identity.clone())));

        Ok(Self {
            adapter,
            config,
            identity,
            observer,
            _app_handle: None,
            _adv_handle: None,
        })
    }

    /// Register the GATT service and start advertising.
    pub async fn start(&mut self) -> Result<()> {
        self.register_gatt().await?;
        self.start_advertising().await?;
        info!("UART service up");
        Ok(())
    }

    async fn register_gatt(&mut self) -> Result<()> {
        let (frame_tx, frame_rx) = mpsc::channel::<Vec<u8>>(self.config.notify_queue);
        let frame_rx = Arc::new(Mutex::new(frame_rx));
        let last_frame = Arc::new(Mutex::new(Vec::new()));

        let rx_state = Arc::new(RxState {
            identity: self.identity.clone(),
            last_frame: last_frame.clone(),
            frames: frame_tx,
            observer: self.observer.clone(),
        });

        // RX: peer writes land here and drive the decode protocol.
        let rx_char = Characteristic {
            uuid: UART_RX_CHARACTERISTIC_UUID,
            write: Some(CharacteristicWrite {
                write: true,
                write_without_response: true,
                method: CharacteristicWriteMethod::Fun(Box::new(move |data, req| {
                    let state = rx_state.clone();
                    Box::pin(async move {
                        debug!(
                            "rx write: {} bytes, offset {}, data {}",
                            data.len(),
                            req.offset,
                            hex::encode(&data)
                        );
                        handle_rx_write(&state, data).await;
                        Ok(())
                    })
                })),
                ..Default::default()
            }),
            ..Default::default()
        };

        // TX: framed messages go out as notifications; reads return the most
        // recent frame.
        let observer = self.observer.clone();
        let read_frame = last_frame.clone();
        let tx_char = Characteristic {
            uuid: UART_TX_CHARACTERISTIC_UUID,
            read: Some(CharacteristicRead {
                read: true,
                fun: Box::new(move |_req| {
                    let last_frame = read_frame.clone();
                    Box::pin(async move { Ok(last_frame.lock().await.clone()) })
                }),
                ..Default::default()
            }),
            notify: Some(CharacteristicNotify {
                notify: true,
                method: CharacteristicNotifyMethod::Fun(Box::new(move |mut notifier| {
                    let frame_rx = frame_rx.clone();
                    let observer = observer.clone();
                    Box::pin(async move {
                        debug!("tx notification stream opened");
                        loop {
                            let frame = { frame_rx.lock().await.recv().await };
                            match frame {
                                Some(frame) => match notifier.notify(frame.clone()).await {
                                    Ok(()) => observer.frame_sent(&frame),
                                    Err(e) => {
                                        observer.delivery_failed(&frame, &e.to_string());
                                        break;
                                    }
                                },
                                None => break,
                            }
                        }
                        debug!("tx notification stream closed");
                    })
                })),
                ..Default::default()
            }),
            ..Default::default()
        };

        let app = Application {
            services: vec![Service {
                uuid: UART_SERVICE_UUID,
                primary: true,
                characteristics: vec![rx_char, tx_char],
                ..Default::default()
            }],
            ..Default::default()
        };

        self._app_handle = Some(
            self.adapter
                .serve_gatt_application(app)
                .await
                .map_err(BleUartError::ServiceRegistration)?,
        );
        info!("UART GATT service registered");
        Ok(())
    }

    async fn start_advertising(&mut self) -> Result<()> {
        let advertisement = Advertisement {
            advertisement_type: bluer::adv::Type::Peripheral,
            local_name: Some(self.config.local_name.clone()),
            service_uuids: vec![UART_SERVICE_UUID].into_iter().collect(),
            discoverable: Some(true),
            ..Default::default()
        };

        self._adv_handle = Some(
            self.adapter
                .advertise(advertisement)
                .await
                .map_err(BleUartError::Advertise)?,
        );
        info!("advertising as '{}'", self.config.local_name);
        Ok(())
    }
}
