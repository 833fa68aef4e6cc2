//! Canonical user-facing message table
//!
//! One message per (kind, locale). The trailing emoji marker is part of
//! the canonical text, not decoration; renderers preserve it verbatim.

use crate::types::{ErrorKind, Locale};

/// Look up the canonical text for a kind in a resolved locale
///
/// Total over both enums and never returns an empty string.
pub fn message_for(kind: ErrorKind, locale: Locale) -> &'static str {
    match kind {
        ErrorKind::NoInternet => match locale {
            Locale::Ar => "لا يوجد اتصال بالإنترنت. تحقق من الشبكة وحاول مرة أخرى. 📡",
            Locale::En => "No internet connection. Check your network and try again. 📡",
            Locale::Fr => "Pas de connexion internet. Vérifiez votre réseau et réessayez. 📡",
        },
        ErrorKind::Timeout => match locale {
            Locale::Ar => "استغرق الطلب وقتًا طويلاً. يرجى المحاولة مرة أخرى. ⏱️",
            Locale::En => "The request took too long. Please try again. ⏱️",
            Locale::Fr => "La requête a pris trop de temps. Veuillez réessayer. ⏱️",
        },
        ErrorKind::ServerError => match locale {
            Locale::Ar => "حدث خطأ من جانبنا. يرجى المحاولة لاحقًا. 🛠️",
            Locale::En => "Something went wrong on our side. Please try again later. 🛠️",
            Locale::Fr => "Un problème est survenu de notre côté. Veuillez réessayer plus tard. 🛠️",
        },
        ErrorKind::ResearchNoResults => match locale {
            Locale::Ar => "لم نعثر على محتوى كافٍ حول هذا الموضوع. جرّب موضوعًا أوسع. 🔍",
            Locale::En => "We couldn't find enough material on this topic. Try a broader topic. 🔍",
            Locale::Fr => "Nous n'avons pas trouvé assez de contenu sur ce sujet. Essayez un sujet plus large. 🔍",
        },
        ErrorKind::ResearchFailed => match locale {
            Locale::Ar => "فشل البحث في الموضوع. يرجى المحاولة بعد قليل. 📚",
            Locale::En => "Topic research failed. Please try again in a moment. 📚",
            Locale::Fr => "La recherche sur le sujet a échoué. Veuillez réessayer dans un instant. 📚",
        },
        ErrorKind::HookGenerationFailed => match locale {
            Locale::Ar => "تعذّر إنشاء مقدمات جذابة لهذا الموضوع. يرجى المحاولة مرة أخرى. 🪝",
            Locale::En => "We couldn't generate hooks for this topic. Please try again. 🪝",
            Locale::Fr => "Impossible de générer des accroches pour ce sujet. Veuillez réessayer. 🪝",
        },
        ErrorKind::ScriptGenerationFailed => match locale {
            Locale::Ar => "فشلت كتابة النص. يرجى المحاولة مرة أخرى. ✍️",
            Locale::En => "Script writing failed. Please try again. ✍️",
            Locale::Fr => "La rédaction du script a échoué. Veuillez réessayer. ✍️",
        },
        ErrorKind::TopicTooShort => match locale {
            Locale::Ar => "الموضوع قصير جدًا. أضف بضع كلمات. 📏",
            Locale::En => "Your topic is too short. Add a few more words. 📏",
            Locale::Fr => "Votre sujet est trop court. Ajoutez quelques mots. 📏",
        },
        ErrorKind::TopicTooLong => match locale {
            Locale::Ar => "الموضوع طويل جدًا. اختصره إلى جملة أو جملتين. ✂️",
            Locale::En => "Your topic is too long. Keep it to a sentence or two. ✂️",
            Locale::Fr => "Votre sujet est trop long. Limitez-le à une phrase ou deux. ✂️",
        },
        ErrorKind::InvalidLanguage => match locale {
            Locale::Ar => "هذه اللغة غير مدعومة بعد. 🌐",
            Locale::En => "That language isn't supported yet. 🌐",
            Locale::Fr => "Cette langue n'est pas encore prise en charge. 🌐",
        },
        ErrorKind::InvalidDuration => match locale {
            Locale::Ar => "مدة الفيديو هذه غير مدعومة. اختر مدة من القائمة. ⏳",
            Locale::En => "That video duration isn't supported. Pick one of the listed lengths. ⏳",
            Locale::Fr => "Cette durée de vidéo n'est pas prise en charge. Choisissez une durée proposée. ⏳",
        },
        ErrorKind::DailyLimitReached => match locale {
            Locale::Ar => "لقد وصلت إلى الحد اليومي للإنشاء. عد غدًا. 📅",
            Locale::En => "You've reached today's generation limit. Come back tomorrow. 📅",
            Locale::Fr => "Vous avez atteint la limite de génération du jour. Revenez demain. 📅",
        },
        ErrorKind::NoCredits => match locale {
            Locale::Ar => "لا يوجد لديك رصيد. أعد الشحن للمتابعة. 💳",
            Locale::En => "You're out of credits. Top up to keep generating. 💳",
            Locale::Fr => "Vous n'avez plus de crédits. Rechargez pour continuer. 💳",
        },
        ErrorKind::ApiKeyInvalid => match locale {
            Locale::Ar => "تعذّر التحقق من الطلب. تحقق من صلاحياتك وحاول مرة أخرى. 🔑",
            Locale::En => "We couldn't authenticate the request. Check your access and try again. 🔑",
            Locale::Fr => "Impossible d'authentifier la requête. Vérifiez vos accès et réessayez. 🔑",
        },
        ErrorKind::RateLimited => match locale {
            Locale::Ar => "طلبات كثيرة جدًا الآن. انتظر لحظة وحاول مرة أخرى. 🚦",
            Locale::En => "Too many requests right now. Wait a moment and try again. 🚦",
            Locale::Fr => "Trop de requêtes en ce moment. Patientez un instant et réessayez. 🚦",
        },
        ErrorKind::UnknownError => match locale {
            Locale::Ar => "حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى. 🤔",
            Locale::En => "Something unexpected happened. Please try again. 🤔",
            Locale::Fr => "Une erreur inattendue s'est produite. Veuillez réessayer. 🤔",
        },
    }
}

/// Resolve loosely typed tags from the request layer into a message
///
/// Two independent resolution steps, in this order: the locale tag is
/// validated first (anything unsupported becomes English), then the kind
/// tag is parsed with `UnknownError` as the defined fallback. Because the
/// locale is resolved before the kind, an unrecognized kind still answers
/// in the requested locale, while an unsupported locale forces English
/// for any kind.
pub fn localized_message(kind_tag: &str, locale_tag: Option<&str>) -> &'static str {
    let locale = Locale::resolve(locale_tag);
    let kind = ErrorKind::from_tag(kind_tag).unwrap_or(ErrorKind::UnknownError);
    message_for(kind, locale)
}
