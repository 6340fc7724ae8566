//! The clinic's reply catalog.
//!
//! Declaration order is matching priority. Triggers must be lowercase.
//! Matching is bare substring containment, so keep an eye on overlap:
//! a word that contains an earlier entry's trigger will never reach a
//! later entry.

use vetbot_model::{ReplyOption, ResponsePayload};

use super::{IntentEntry, ResolvedContact, intent_keys as keys};

pub(super) fn entries(contact: &ResolvedContact) -> Vec<IntentEntry> {
    vec![
        IntentEntry {
            key: keys::EMERGENCY,
            triggers: &["acil", "zehir", "kanama", "kaza", "nefes alam"],
            payload: ResponsePayload::with_message(format!(
                "Acil bir durum varsa lütfen vakit kaybetmeden bizi arayın: {}",
                contact.phone_display
            ))
            .with_detail(
                "Kliniğimiz acil vakalar için telefonla 7/24 ulaşılabilir.",
            )
            .with_options([
                ReplyOption::navigate(
                    format!("Hemen Ara: {}", contact.phone_display),
                    contact.tel_link(),
                ),
                ReplyOption::navigate("WhatsApp'tan Yazın", contact.wa_link()),
            ])
            .with_urgency(),
        },
        IntentEntry {
            key: keys::GREETING,
            triggers: &[
                "merhaba",
                "selam",
                "günaydın",
                "gunaydin",
                "iyi günler",
                "iyi gunler",
            ],
            payload: ResponsePayload::with_message(
                "Merhaba! Pati Veteriner Kliniği asistanına hoş geldiniz. 🐾 \
                 Size nasıl yardımcı olabilirim?",
            )
            .with_options([
                ReplyOption::invoke("Randevu almak istiyorum", keys::APPOINTMENT),
                ReplyOption::invoke("Hizmetleriniz neler?", keys::SERVICES),
                ReplyOption::invoke("Acil durum", keys::EMERGENCY),
                ReplyOption::navigate("İletişim bilgileri", "/iletisim"),
            ]),
        },
        IntentEntry {
            key: keys::APPOINTMENT,
            triggers: &["randevu", "rezervasyon", "muayene"],
            payload: ResponsePayload::with_message(
                "Randevu için online formumuzu kullanabilir veya bizi \
                 doğrudan arayabilirsiniz.",
            )
            .with_detail("Online randevular aynı gün içinde telefonla teyit edilir.")
            .with_options([
                ReplyOption::navigate("Online Randevu Formu", "/randevu"),
                ReplyOption::navigate(
                    format!("Telefonla Randevu: {}", contact.phone_display),
                    contact.tel_link(),
                ),
                ReplyOption::invoke("Çalışma saatleriniz?", keys::HOURS),
            ]),
        },
        IntentEntry {
            key: keys::PRICING,
            triggers: &[
                "fiyat",
                "ücret",
                "ucret",
                "ne kadar",
                "kaç para",
                "kac para",
            ],
            payload: ResponsePayload::with_message(
                "Ücretlerimiz uygulanacak işleme ve dostunuzun türüne göre \
                 değişiyor.",
            )
            .with_detail(
                "Net bilgi için bizi aramanız yeterli; tüm ücretler muayene \
                 öncesinde sizinle paylaşılır.",
            )
            .with_options([
                ReplyOption::navigate(
                    format!("Bizi Arayın: {}", contact.phone_display),
                    contact.tel_link(),
                ),
                ReplyOption::invoke("Randevu almak istiyorum", keys::APPOINTMENT),
            ]),
        },
        IntentEntry {
            key: keys::VACCINATION,
            triggers: &["aşı", "asi", "kuduz", "karma"],
            payload: ResponsePayload::with_message(
                "Aşı takvimini dostunuzun yaşına ve türüne göre birlikte \
                 planlıyoruz.",
            )
            .with_detail(
                "Kuduz, karma ve iç-dış parazit uygulamaları kliniğimizde \
                 yapılmaktadır.",
            )
            .with_options([ReplyOption::invoke(
                "Aşı için randevu",
                keys::APPOINTMENT,
            )]),
        },
        IntentEntry {
            key: keys::DENTAL,
            triggers: &["diş", "dis", "ağız", "agiz"],
            payload: ResponsePayload::with_message(
                "Ağız ve diş sağlığı kontrolleri ile diş taşı temizliği \
                 hizmetimiz mevcut.",
            )
            .with_options([
                ReplyOption::invoke("Randevu almak istiyorum", keys::APPOINTMENT),
                ReplyOption::invoke("Ücret bilgisi", keys::PRICING),
            ]),
        },
        IntentEntry {
            key: keys::GROOMING,
            triggers: &["tıraş", "tiras", "kuaför", "kuafor", "bakım", "bakim"],
            payload: ResponsePayload::with_message(
                "Tıraş ve bakım hizmetimiz yıkama, kurutma ve tırnak kesimini \
                 kapsar.",
            )
            .with_options([ReplyOption::invoke(
                "Randevu almak istiyorum",
                keys::APPOINTMENT,
            )]),
        },
        IntentEntry {
            key: keys::SURGERY,
            triggers: &["ameliyat", "operasyon", "kısırlaştır", "kisirlastir"],
            payload: ResponsePayload::with_message(
                "Kısırlaştırma dahil yumuşak doku operasyonları kliniğimizde \
                 yapılmaktadır.",
            )
            .with_detail("Operasyon öncesi genel muayene ve kan tahlili yapılır.")
            .with_options([
                ReplyOption::navigate(
                    format!("Bizi Arayın: {}", contact.phone_display),
                    contact.tel_link(),
                ),
                ReplyOption::invoke("Randevu almak istiyorum", keys::APPOINTMENT),
            ]),
        },
        IntentEntry {
            key: keys::SERVICES,
            triggers: &["hizmet", "servis", "neler yap"],
            payload: ResponsePayload::with_message("Başlıca hizmetlerimiz:")
                .with_detail(
                    "Muayene, aşılama, cerrahi operasyonlar, diş bakımı, tıraş \
                     ve bakım, laboratuvar tahlilleri.",
                )
                .with_options([
                    ReplyOption::invoke("Aşılar", keys::VACCINATION),
                    ReplyOption::invoke("Diş bakımı", keys::DENTAL),
                    ReplyOption::invoke("Tıraş ve bakım", keys::GROOMING),
                    ReplyOption::invoke("Ameliyatlar", keys::SURGERY),
                ]),
        },
        IntentEntry {
            key: keys::HOURS,
            triggers: &[
                "saat",
                "açık",
                "acik",
                "kaçta",
                "kacta",
                "çalışma",
                "calisma",
            ],
            payload: ResponsePayload::with_message(
                "Hafta içi 09:00 - 19:00, cumartesi 10:00 - 17:00 arası \
                 açığız.",
            )
            .with_detail("Acil vakalar için telefonla 7/24 ulaşabilirsiniz.")
            .with_options([
                ReplyOption::invoke("Randevu almak istiyorum", keys::APPOINTMENT),
                ReplyOption::invoke("Acil durum", keys::EMERGENCY),
            ]),
        },
        IntentEntry {
            key: keys::LOCATION,
            triggers: &["adres", "konum", "nerede", "yol tarifi"],
            payload: ResponsePayload::with_message(
                "Adresimiz: Bağdat Caddesi No:123, Kadıköy / İstanbul.",
            )
            .with_options([
                ReplyOption::navigate(
                    "Haritada Aç",
                    "https://maps.google.com/?q=Pati+Veteriner+Klinigi",
                ),
                ReplyOption::navigate("İletişim sayfası", "/iletisim"),
            ]),
        },
        IntentEntry {
            key: keys::CONTACT,
            triggers: &[
                "telefon",
                "iletişim",
                "iletisim",
                "whatsapp",
                "mail",
                "e-posta",
                "eposta",
            ],
            payload: ResponsePayload::with_message(
                "Bize dilediğiniz kanaldan ulaşabilirsiniz.",
            )
            .with_options([
                ReplyOption::navigate(
                    format!("Telefon: {}", contact.phone_display),
                    contact.tel_link(),
                ),
                ReplyOption::navigate("WhatsApp", contact.wa_link()),
                ReplyOption::navigate(
                    format!("E-posta: {}", contact.email),
                    contact.mailto_link(),
                ),
            ]),
        },
        IntentEntry {
            key: keys::THANKS,
            triggers: &["teşekkür", "tesekkur", "sağol", "sagol"],
            payload: ResponsePayload::with_message(
                "Rica ederiz! 🐾 Başka bir konuda yardımcı olabilir miyim?",
            )
            .with_options([
                ReplyOption::invoke("Hizmetleriniz neler?", keys::SERVICES),
                ReplyOption::navigate("Ana sayfa", "/"),
            ]),
        },
        IntentEntry {
            key: keys::FALLBACK,
            triggers: &[],
            payload: ResponsePayload::with_message(
                "Üzgünüm, tam olarak anlayamadım. Aşağıdaki konulardan \
                 biriyle yardımcı olabilirim:",
            )
            .with_options([
                ReplyOption::invoke("Randevu almak istiyorum", keys::APPOINTMENT),
                ReplyOption::invoke("Hizmetleriniz neler?", keys::SERVICES),
                ReplyOption::invoke("Çalışma saatleri", keys::HOURS),
                ReplyOption::navigate("İletişim", "/iletisim"),
            ]),
        },
    ]
}
