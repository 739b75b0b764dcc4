//! Test fixtures
//!
//! Product page HTML snippets covering each classification signal.

/// Page with an explicit Sold Out danger alert
pub fn sold_out_page() -> &'static str {
    r#"<html><body>
    <h1>Amul High Protein Buttermilk</h1>
    <div class="alert alert-danger mt-3" role="alert">Sold Out</div>
    <button class="btn btn-primary" disabled>Add to Cart</button>
    </body></html>"#
}

/// Page with an enabled Add to Cart button
pub fn in_stock_page() -> &'static str {
    r#"<html><body>
    <h1>Amul High Protein Buttermilk</h1>
    <span class="price">₹600</span>
    <button class="btn btn-primary" type="button">Add to Cart</button>
    </body></html>"#
}

/// Sold Out alert together with a disabled button; the alert must win
pub fn sold_out_with_disabled_button_page() -> &'static str {
    r#"<html><body>
    <div class="alert alert-danger mt-3">
      <strong>Sold Out</strong>
    </div>
    <button disabled class="btn">Add to Cart</button>
    </body></html>"#
}

/// Page telling the user the product cannot be delivered to the pincode
pub fn undeliverable_page() -> &'static str {
    r#"<html><body>
    <h1>Amul High Protein Buttermilk</h1>
    <p>This product is not deliverable to your location.</p>
    </body></html>"#
}

/// Page with none of the known signals
pub fn bare_page() -> &'static str {
    r#"<html><body><h1>Amul High Protein Buttermilk</h1></body></html>"#
}
