pub const APP_STYLES: &str = r#"
/* Shell */
:root {
    --font-sans: Inter, system-ui, sans-serif;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--brand-background, #f7f7fb);
    color: #1f2430;
}

.storefront-main {
    max-width: 1080px;
    margin: 0 auto;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

/* Header */
.storefront-header {
    background: #ffffff;
    border-bottom: 1px solid #e5e7eb;
}

.storefront-header-inner {
    max-width: 1080px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.storefront-title {
    margin: 0;
    color: var(--primary, #2f4fdd);
}

.storefront-tagline {
    margin: 0.25rem 0 0 0;
}

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
    border-radius: 1.5rem;
    border: 1px solid #e5e7eb;
    background: #ffffff;
}

.hero-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-content {
    position: relative;
    z-index: 1;
    padding: 3rem 2.5rem;
    background: linear-gradient(to right, rgba(255, 255, 255, 0.92), rgba(255, 255, 255, 0.6));
}

.hero-subtitle {
    margin: 0;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    font-weight: 600;
    color: var(--accent, #e07a3f);
}

.hero-title {
    margin: 1rem 0 0 0;
    max-width: 36rem;
    line-height: 1.15;
}

.hero-description {
    margin: 1rem 0 0 0;
    max-width: 36rem;
}

.hero-buttons {
    margin-top: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.hero-button {
    padding: 0.6rem 1.4rem;
    border-radius: 0.6rem;
    border: 1px solid var(--primary, #2f4fdd);
    background: transparent;
    color: var(--primary, #2f4fdd);
    cursor: pointer;
}

.hero-button.primary {
    background: var(--primary, #2f4fdd);
    color: #ffffff;
}

/* Coupons */
.coupons-title {
    margin: 0 0 1rem 0;
}

.coupons-hint {
    color: #6b7280;
}

.coupons-hint.error {
    color: #b91c1c;
}

.coupon-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.25rem;
}

.coupon-card {
    display: flex;
    flex-direction: column;
    border: 1px solid #e5e7eb;
    border-radius: 1rem;
    overflow: hidden;
    background: #ffffff;
}

.coupon-card-media {
    position: relative;
}

.coupon-card-image {
    width: 100%;
    height: 150px;
    object-fit: cover;
    display: block;
}

.coupon-card-new {
    position: absolute;
    top: 0.6rem;
    left: 0.6rem;
    background: var(--accent, #e07a3f);
    color: #ffffff;
    font-size: 0.7rem;
    font-weight: 600;
    padding: 0.2rem 0.5rem;
    border-radius: 999px;
}

.coupon-card-body {
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    flex: 1;
}

.coupon-discount {
    align-self: flex-start;
    font-weight: 700;
    color: var(--primary, #2f4fdd);
}

.coupon-card-title {
    margin: 0;
}

.coupon-card-description {
    margin: 0;
    flex: 1;
}

.coupon-card-footer {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    border-top: 1px dashed #e5e7eb;
    padding-top: 0.6rem;
}

.coupon-card-terms {
    color: #9ca3af;
}

.coupon-card-meta {
    display: flex;
    justify-content: space-between;
    font-size: 0.8rem;
    color: #6b7280;
}

.coupon-card-code {
    font-family: monospace;
    background: #f3f4f6;
    padding: 0.1rem 0.4rem;
    border-radius: 0.3rem;
}

/* Edit-mode wrapper */
.editable-element {
    position: relative;
    cursor: pointer;
    border-radius: 0.35rem;
    outline: 2px solid transparent;
    outline-offset: 2px;
    transition: outline-color 0.15s ease, background-color 0.15s ease;
}

.editable-element:hover {
    outline-color: color-mix(in srgb, var(--primary, #2f4fdd) 50%, transparent);
    background-color: color-mix(in srgb, var(--primary, #2f4fdd) 5%, transparent);
}

.editable-element.selected {
    outline-color: var(--primary, #2f4fdd);
    background-color: color-mix(in srgb, var(--primary, #2f4fdd) 5%, transparent);
}

.editable-element-badge {
    position: absolute;
    top: -1.4rem;
    left: 0;
    z-index: 40;
    background: var(--primary, #2f4fdd);
    color: #ffffff;
    font-size: 0.7rem;
    padding: 0.15rem 0.5rem;
    border-radius: 0.35rem 0.35rem 0 0;
    pointer-events: none;
    white-space: nowrap;
}

/* Mode toggle + banner */
.mode-toggle {
    border: 1px solid var(--primary, #2f4fdd);
    background: transparent;
    color: var(--primary, #2f4fdd);
    padding: 0.45rem 0.9rem;
    border-radius: 0.5rem;
    cursor: pointer;
    white-space: nowrap;
}

.mode-toggle.active,
.mode-toggle.on-banner {
    background: #ffffff;
    color: var(--primary, #2f4fdd);
    border-color: #ffffff;
}

.edit-mode-banner {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 90;
    background: var(--primary, #2f4fdd);
    color: #ffffff;
    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.18);
}

.edit-mode-banner-inner {
    max-width: 1080px;
    margin: 0 auto;
    padding: 0.6rem 1.5rem;
    display: flex;
    align-items: center;
    gap: 1rem;
}

.edit-mode-banner-inner p {
    margin: 0;
    flex: 1;
    font-size: 0.9rem;
}

.edit-mode-badge {
    background: rgba(255, 255, 255, 0.18);
    padding: 0.2rem 0.6rem;
    border-radius: 999px;
    font-size: 0.8rem;
}

/* Floating editor panel */
.personalization-panel {
    position: fixed;
    top: 5rem;
    right: 1rem;
    z-index: 100;
    width: 22rem;
    max-height: calc(100vh - 7rem);
    display: flex;
    flex-direction: column;
    background: #ffffff;
    border: 2px solid #e5e7eb;
    border-radius: 1rem;
    box-shadow: 0 20px 50px rgba(15, 23, 42, 0.25);
    transition: background-color 0.4s ease, border-color 0.4s ease;
}

.personalization-panel.saving {
    border-color: #fcd34d;
    background: #fffbeb;
}

.personalization-panel.success {
    border-color: #6ee7b7;
    background: #ecfdf5;
}

.personalization-panel.error {
    border-color: #fda4af;
    background: #fff1f2;
}

.panel-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1rem 0.5rem 1rem;
}

.panel-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.panel-title h3 {
    margin: 0;
    font-size: 1rem;
}

.panel-close {
    border: none;
    background: transparent;
    cursor: pointer;
    font-size: 1rem;
    color: #6b7280;
}

.panel-type-badge {
    align-self: flex-start;
    margin: 0 1rem;
    background: #f3f4f6;
    color: #374151;
    font-size: 0.7rem;
    padding: 0.15rem 0.5rem;
    border-radius: 999px;
}

.panel-properties {
    flex: 1;
    overflow-y: auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    border-bottom: 1px solid #e5e7eb;
}

.editor-field {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}

.editor-label {
    font-size: 0.8rem;
    font-weight: 600;
    color: #374151;
}

.editor-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.editor-stack {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.editor-input {
    flex: 1;
    padding: 0.45rem 0.6rem;
    border: 1px solid #d1d5db;
    border-radius: 0.45rem;
    font-size: 0.85rem;
    box-sizing: border-box;
    width: 100%;
}

.editor-color-swatch {
    width: 3rem;
    height: 2.2rem;
    padding: 0;
    border: 1px solid #d1d5db;
    border-radius: 0.45rem;
    cursor: pointer;
}

.editor-slider {
    flex: 1;
}

.editor-readout {
    width: 3.5rem;
    text-align: right;
    font-size: 0.8rem;
    color: #6b7280;
}

.editor-select {
    padding: 0.45rem 0.6rem;
    border: 1px solid #d1d5db;
    border-radius: 0.45rem;
    font-size: 0.85rem;
    background: #ffffff;
}

.editor-image-preview {
    width: 100%;
    height: 8rem;
    object-fit: cover;
    border: 1px solid #e5e7eb;
    border-radius: 0.45rem;
}

.panel-actions {
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.panel-action-row {
    display: flex;
    gap: 0.5rem;
}

.panel-button {
    flex: 1;
    padding: 0.45rem 0.6rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    background: #ffffff;
    cursor: pointer;
    font-size: 0.85rem;
}

.panel-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.panel-button.primary {
    background: var(--primary, #2f4fdd);
    border-color: var(--primary, #2f4fdd);
    color: #ffffff;
}

.panel-status {
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
    padding: 0.5rem 0.75rem;
    font-size: 0.8rem;
    color: #374151;
}

.panel-status.success {
    border-color: #6ee7b7;
}

.panel-status.error {
    border-color: #fda4af;
}
"#;
